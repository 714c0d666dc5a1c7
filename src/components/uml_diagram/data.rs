//! Class diagram of the PaNotify application.

use super::types::{Category, DiagramData, Edge, Node, NodeKind, Point, RelationshipKind, Size};

const fn at(x: f64, y: f64) -> Point {
	Point { x, y }
}

const fn size(width: f64, height: f64) -> Size {
	Size { width, height }
}

pub static PANOTIFY: DiagramData = DiagramData {
	nodes: NODES,
	edges: EDGES,
};

const NODES: &[Node] = &[
	Node {
		id: "user",
		name: "User",
		kind: NodeKind::Class,
		category: Category::Model,
		position: at(200.0, 100.0),
		size: size(200.0, 180.0),
		attributes: &[
			"- userId: int",
			"- firstName: String",
			"- lastName: String",
			"- username: String",
			"- email: String",
			"- accountType: String",
		],
		methods: &[
			"+ getFullName(): String",
			"+ setPassword(String): void",
		],
	},
	Node {
		id: "student",
		name: "Student",
		kind: NodeKind::Class,
		category: Category::Model,
		position: at(100.0, 350.0),
		size: size(200.0, 120.0),
		attributes: &[
			"- enrolledCourses: List<CourseInfo>",
			"- examResults: List<ExamResult>",
		],
		methods: &[
			"+ addEnrolledCourse(CourseInfo): void",
			"+ getStudentId(): String",
		],
	},
	Node {
		id: "instructor",
		name: "Instructor",
		kind: NodeKind::Class,
		category: Category::Model,
		position: at(350.0, 350.0),
		size: size(200.0, 120.0),
		attributes: &[
			"- department: String",
			"- courses: List<Course>",
		],
		methods: &[
			"+ addCourse(Course): void",
			"+ getInstructorId(): String",
		],
	},
	Node {
		id: "course",
		name: "Course",
		kind: NodeKind::Class,
		category: Category::Model,
		position: at(600.0, 100.0),
		size: size(200.0, 180.0),
		attributes: &[
			"- courseId: int",
			"- courseName: String",
			"- courseCode: String",
			"- instructorId: int",
			"- instructorName: String",
			"- exams: List<Exam>",
		],
		methods: &[
			"+ addExam(Exam): void",
			"+ addEnrollment(CourseEnrollment): void",
		],
	},
	Node {
		id: "exam",
		name: "Exam",
		kind: NodeKind::Class,
		category: Category::Model,
		position: at(600.0, 350.0),
		size: size(200.0, 180.0),
		attributes: &[
			"- examId: int",
			"- title: String",
			"- courseId: int",
			"- instructorId: int",
			"- deadline: LocalDateTime",
			"- questions: List<Question>",
		],
		methods: &[
			"+ isPublished(): boolean",
			"+ getDurationMinutes(): int",
		],
	},
	Node {
		id: "question",
		name: "Question",
		kind: NodeKind::Class,
		category: Category::Model,
		position: at(600.0, 600.0),
		size: size(200.0, 140.0),
		attributes: &[
			"- questionId: int",
			"- examId: int",
			"- questionText: String",
			"- options: String",
			"- correctOption: int",
		],
		methods: &[
			"+ getCorrectAnswer(): String",
		],
	},
	Node {
		id: "studentAnswer",
		name: "StudentAnswer",
		kind: NodeKind::Class,
		category: Category::Model,
		position: at(350.0, 600.0),
		size: size(200.0, 140.0),
		attributes: &[
			"- studentId: int",
			"- questionId: int",
			"- answerText: String",
			"- isCorrect: boolean",
			"- submittedAt: LocalDateTime",
		],
		methods: &[
			"+ isCorrect(): boolean",
		],
	},
	Node {
		id: "examResult",
		name: "ExamResult",
		kind: NodeKind::Class,
		category: Category::Model,
		position: at(100.0, 600.0),
		size: size(200.0, 140.0),
		attributes: &[
			"- resultId: int",
			"- examId: int",
			"- studentId: int",
			"- totalScore: int",
			"- maxScore: int",
		],
		methods: &[
			"+ getScorePercentage(): double",
		],
	},
	Node {
		id: "examService",
		name: "ExamService",
		kind: NodeKind::Class,
		category: Category::Service,
		position: at(900.0, 350.0),
		size: size(220.0, 180.0),
		attributes: &[
			"- connection: Connection",
		],
		methods: &[
			"+ createExam(Exam): boolean",
			"+ addQuestion(Question): int",
			"+ getExamQuestions(int): List<Question>",
			"+ submitAnswer(StudentAnswer): boolean",
			"+ gradeExam(int, int): boolean",
			"+ getExamById(int): Exam",
			"+ getExamsForStudent(int): List<Exam>",
		],
	},
	Node {
		id: "courseService",
		name: "CourseService",
		kind: NodeKind::Class,
		category: Category::Service,
		position: at(900.0, 100.0),
		size: size(220.0, 180.0),
		attributes: &[
			"- connection: Connection",
		],
		methods: &[
			"+ createCourse(Course): boolean",
			"+ getCourseById(int): Course",
			"+ getInstructorCourses(int): List<Course>",
			"+ getEnrolledCourses(int): List<Course>",
			"+ enrollStudent(int, int): boolean",
			"+ getCourseStudents(int): List<Student>",
		],
	},
	Node {
		id: "userService",
		name: "UserService",
		kind: NodeKind::Class,
		category: Category::Service,
		position: at(900.0, 600.0),
		size: size(220.0, 140.0),
		attributes: &[
			"- connection: Connection",
		],
		methods: &[
			"+ createUser(User): boolean",
			"+ getUserById(int): User",
			"+ updateUser(User): boolean",
			"+ changePassword(int, String): boolean",
		],
	},
	Node {
		id: "reportService",
		name: "ReportService",
		kind: NodeKind::Class,
		category: Category::Service,
		position: at(900.0, 800.0),
		size: size(220.0, 140.0),
		attributes: &[
			"- connection: Connection",
		],
		methods: &[
			"+ getStudentReport(int, int): StudentReport",
			"+ getCourseReport(int): List<ExamResult>",
			"+ getClassPerformance(int): Map<String, Double>",
			"+ getTopPerformers(int): List<StudentReport>",
		],
	},
	Node {
		id: "authService",
		name: "AuthenticationService",
		kind: NodeKind::Class,
		category: Category::Service,
		position: at(600.0, 800.0),
		size: size(220.0, 140.0),
		attributes: &[
			"- connection: Connection",
		],
		methods: &[
			"+ login(String, String): User",
			"+ validateCredentials(String, String): boolean",
			"+ registerUser(User): boolean",
			"+ isUsernameAvailable(String): boolean",
		],
	},
	Node {
		id: "loginView",
		name: "LoginView",
		kind: NodeKind::Class,
		category: Category::Ui,
		position: at(450.0, 1000.0),
		size: size(200.0, 100.0),
		attributes: &[
			"- authService: AuthenticationService",
		],
		methods: &[
			"+ show(String): void",
		],
	},
	Node {
		id: "studentDashboard",
		name: "StudentDashboard",
		kind: NodeKind::Class,
		category: Category::Ui,
		position: at(200.0, 1000.0),
		size: size(200.0, 120.0),
		attributes: &[
			"- student: Student",
			"- tabs: Map<String, StudentTab>",
		],
		methods: &[
			"+ navigateToTab(String): void",
			"+ initializeTabs(): void",
		],
	},
	Node {
		id: "instructorDashboard",
		name: "InstructorDashboard",
		kind: NodeKind::Class,
		category: Category::Ui,
		position: at(700.0, 1000.0),
		size: size(200.0, 120.0),
		attributes: &[
			"- instructor: Instructor",
			"- tabs: Map<String, InstructorTab>",
		],
		methods: &[
			"+ navigateToTab(String): void",
			"+ initializeTabs(): void",
		],
	},
	Node {
		id: "studentTab",
		name: "StudentTab",
		kind: NodeKind::Interface,
		category: Category::Ui,
		position: at(150.0, 1150.0),
		size: size(180.0, 80.0),
		attributes: &[],
		methods: &[
			"+ getContent(): VBox",
			"+ onNavigatedTo(): void",
		],
	},
	Node {
		id: "instructorTab",
		name: "InstructorTab",
		kind: NodeKind::Interface,
		category: Category::Ui,
		position: at(750.0, 1150.0),
		size: size(180.0, 80.0),
		attributes: &[],
		methods: &[
			"+ getContent(): VBox",
			"+ onNavigatedTo(): void",
		],
	},
];

const EDGES: &[Edge] = &[
	Edge {
		id: "user_student",
		kind: RelationshipKind::Inheritance,
		source: "student",
		target: "user",
		source_label: None,
		target_label: None,
		points: &[],
	},
	Edge {
		id: "user_instructor",
		kind: RelationshipKind::Inheritance,
		source: "instructor",
		target: "user",
		source_label: None,
		target_label: None,
		points: &[],
	},
	Edge {
		id: "course_exam",
		kind: RelationshipKind::Association,
		source: "course",
		target: "exam",
		source_label: Some("1"),
		target_label: Some("*"),
		points: &[],
	},
	Edge {
		id: "exam_question",
		kind: RelationshipKind::Association,
		source: "exam",
		target: "question",
		source_label: Some("1"),
		target_label: Some("*"),
		points: &[],
	},
	Edge {
		id: "student_examResult",
		kind: RelationshipKind::Association,
		source: "student",
		target: "examResult",
		source_label: Some("1"),
		target_label: Some("*"),
		points: &[],
	},
	Edge {
		id: "question_studentAnswer",
		kind: RelationshipKind::Association,
		source: "question",
		target: "studentAnswer",
		source_label: Some("1"),
		target_label: Some("*"),
		points: &[],
	},
	Edge {
		id: "exam_examResult",
		kind: RelationshipKind::Association,
		source: "exam",
		target: "examResult",
		source_label: Some("1"),
		target_label: Some("*"),
		points: &[],
	},
	Edge {
		id: "student_studentAnswer",
		kind: RelationshipKind::Association,
		source: "student",
		target: "studentAnswer",
		source_label: Some("1"),
		target_label: Some("*"),
		points: &[],
	},
	Edge {
		id: "course_instructor",
		kind: RelationshipKind::Association,
		source: "course",
		target: "instructor",
		source_label: Some("*"),
		target_label: Some("1"),
		points: &[],
	},
	Edge {
		id: "courseService_course",
		kind: RelationshipKind::Dependency,
		source: "courseService",
		target: "course",
		source_label: None,
		target_label: None,
		points: &[],
	},
	Edge {
		id: "examService_exam",
		kind: RelationshipKind::Dependency,
		source: "examService",
		target: "exam",
		source_label: None,
		target_label: None,
		points: &[],
	},
	Edge {
		id: "userService_user",
		kind: RelationshipKind::Dependency,
		source: "userService",
		target: "user",
		source_label: None,
		target_label: None,
		points: &[],
	},
	Edge {
		id: "authService_user",
		kind: RelationshipKind::Dependency,
		source: "authService",
		target: "user",
		source_label: None,
		target_label: None,
		points: &[],
	},
	Edge {
		id: "loginView_authService",
		kind: RelationshipKind::Dependency,
		source: "loginView",
		target: "authService",
		source_label: None,
		target_label: None,
		points: &[],
	},
	Edge {
		id: "studentDashboard_student",
		kind: RelationshipKind::Dependency,
		source: "studentDashboard",
		target: "student",
		source_label: None,
		target_label: None,
		points: &[],
	},
	Edge {
		id: "instructorDashboard_instructor",
		kind: RelationshipKind::Dependency,
		source: "instructorDashboard",
		target: "instructor",
		source_label: None,
		target_label: None,
		points: &[],
	},
	Edge {
		id: "studentTab_coursesTab",
		kind: RelationshipKind::Implementation,
		source: "coursesTab",
		target: "studentTab",
		source_label: None,
		target_label: None,
		points: &[],
	},
	Edge {
		id: "studentTab_examsTab",
		kind: RelationshipKind::Implementation,
		source: "examsTab",
		target: "studentTab",
		source_label: None,
		target_label: None,
		points: &[],
	},
	Edge {
		id: "instructorTab_managementTab",
		kind: RelationshipKind::Implementation,
		source: "managementTab",
		target: "instructorTab",
		source_label: None,
		target_label: None,
		points: &[],
	},
];

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn node_ids_are_unique() {
		let ids: HashSet<_> = PANOTIFY.nodes.iter().map(|n| n.id).collect();
		assert_eq!(ids.len(), PANOTIFY.nodes.len());
	}

	#[test]
	fn only_implementation_edges_dangle() {
		let dangling: Vec<_> = PANOTIFY
			.edges
			.iter()
			.filter(|e| PANOTIFY.endpoints(e).is_none())
			.map(|e| (e.kind, e.source))
			.collect();
		assert_eq!(
			dangling,
			vec![
				(RelationshipKind::Implementation, "coursesTab"),
				(RelationshipKind::Implementation, "examsTab"),
				(RelationshipKind::Implementation, "managementTab"),
			]
		);
	}

	#[test]
	fn routing_points_are_unused() {
		assert!(PANOTIFY.edges.iter().all(|e| e.points.is_empty()));
	}

	#[test]
	fn interfaces_have_no_attributes() {
		for node in PANOTIFY.nodes.iter().filter(|n| n.kind == NodeKind::Interface) {
			assert!(node.attributes.is_empty(), "{} has attributes", node.id);
			assert_eq!(node.category, Category::Ui);
		}
	}

	#[test]
	fn extent_covers_every_box() {
		let extent = PANOTIFY.extent();
		assert_eq!(extent, size(1120.0, 1230.0));
	}
}
