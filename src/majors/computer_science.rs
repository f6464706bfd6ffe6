use super::{ElectiveRule, MajorRequirements, NamedCourse, RequiredCourse};

const FALL_SPRING: &[&str] = &["Fall", "Spring"];

pub static REQUIREMENTS: MajorRequirements = MajorRequirements {
    name: "Computer Science",
    total_courses_required: 12,
    total_credits_required: 48,
    core: &[
        RequiredCourse {
            course_code: "CSCI-UA.0101",
            name: "Introduction to Computer Science",
            prerequisites: &["CSCI-UA.0002", "CSCI-UA.0003"],
            semesters_offered: FALL_SPRING,
            notes: "Prerequisite: CSCI-UA.0002 or CSCI-UA.0003 or placement exam",
        },
        RequiredCourse {
            course_code: "CSCI-UA.0102",
            name: "Data Structures",
            prerequisites: &["CSCI-UA.0101"],
            semesters_offered: FALL_SPRING,
            notes: "",
        },
        RequiredCourse {
            course_code: "CSCI-UA.0201",
            name: "Computer Systems Organization",
            prerequisites: &["CSCI-UA.0102"],
            semesters_offered: FALL_SPRING,
            notes: "",
        },
        RequiredCourse {
            course_code: "CSCI-UA.0202",
            name: "Operating Systems",
            prerequisites: &["CSCI-UA.0201"],
            semesters_offered: FALL_SPRING,
            notes: "",
        },
        RequiredCourse {
            course_code: "CSCI-UA.0310",
            name: "Basic Algorithms",
            prerequisites: &["CSCI-UA.0102"],
            semesters_offered: FALL_SPRING,
            notes: "Also requires Discrete Mathematics and a Calculus course",
        },
        RequiredCourse {
            course_code: "MATH-UA.0121",
            name: "Calculus I",
            prerequisites: &["MATH-UA.0009"],
            semesters_offered: &["Fall", "Spring", "Summer"],
            notes: "Prerequisite: MATH-UA.0009",
        },
    ],
    electives: ElectiveRule {
        count: 5,
        pattern: "CSCI-UA.04xx",
        substitutions: &[
            NamedCourse {
                course_code: "MATH-UA.0122",
                name: "Calculus II",
            },
            NamedCourse {
                course_code: "MATH-UA.0140",
                name: "Linear Algebra",
            },
            NamedCourse {
                course_code: "MATH-UA.0185",
                name: "Probability and Statistics",
            },
        ],
        max_substitutions: 2,
    },
};
