use crate::{courses::Course, majors::MajorProgress, plans::Semester};

/// Candidates beyond this many are summarized as "... and N more".
pub const MAX_PROMPT_COURSES: usize = 50;
pub const MAX_DESCRIPTION_CHARS: usize = 200;
/// Remaining core requirements listed in the prompt.
pub const MAX_PROMPT_CORE: usize = 5;
pub const TARGET_CREDITS_MIN: u32 = 16;
pub const TARGET_CREDITS_MAX: u32 = 24;

pub const SYSTEM_PROMPT: &str = "You are an expert academic advisor specializing in course \
planning and curriculum design. You help students build balanced, strategic semester \
schedules that fit their major, their career goals and their workload.

You understand course structures, prerequisite chains, difficulty levels, and how to \
sequence requirements over four years. Give thoughtful, personalized recommendations and \
always answer with a single JSON object.";

/// What the prompt knows about the student.
#[derive(Debug)]
pub struct StudentContext<'a> {
    pub name: &'a str,
    pub major: &'a str,
    pub year: &'a str,
    pub interests: &'a [String],
    pub career_path: &'a str,
    pub side_interests: &'a [String],
    pub excluded: &'a [String],
    /// Present when the major has known requirements.
    pub progress: Option<&'a MajorProgress>,
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

fn join_or<S: AsRef<str>>(items: &[S], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ")
    }
}

fn truncate_description(description: &str) -> String {
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        let cut: String = description.chars().take(MAX_DESCRIPTION_CHARS).collect();
        format!("{cut}...")
    } else {
        description.to_string()
    }
}

fn course_block(course: &Course) -> String {
    format!(
        "  - {code}: {title}\n    Credits: {credits} | Difficulty: {difficulty}/5\n    \
         Prerequisites: {prereqs}\n    Offered: {offered}\n    Description: {description}\n",
        code = course.course_code,
        title = course.title,
        credits = course.credits,
        difficulty = course.difficulty,
        prereqs = join_or(&course.prerequisites, "None"),
        offered = join_or(&course.semesters_offered, "Unknown"),
        description = truncate_description(&course.description),
    )
}

fn major_section(progress: &MajorProgress) -> String {
    let reqs = progress.requirements;
    let mut out = format!(
        "MAJOR PROGRESS ({name}, {courses} courses / {credits} credits required):\n\
         - Overall Progress: {pct:.0}% complete\n\
         - Core Requirements: {core_done}/{core_total} completed\n\
         - Electives: {elec_done} completed, {elec_left} still needed\n\n",
        name = reqs.name,
        courses = reqs.total_courses_required,
        credits = reqs.total_credits_required,
        pct = progress.percentage(),
        core_done = progress.core_completed.len(),
        core_total = reqs.core.len(),
        elec_done = progress.electives_completed.len(),
        elec_left = progress.electives_remaining,
    );

    if !progress.core_remaining.is_empty() {
        out.push_str("REMAINING CORE REQUIREMENTS:\n");
        for req in progress.core_remaining.iter().take(MAX_PROMPT_CORE) {
            out.push_str(&format!(
                "  - {}: {} (prerequisites: {}; offered: {})\n",
                req.course_code,
                req.name,
                join_or(req.prerequisites, "None"),
                join_or(req.semesters_offered, "Unknown"),
            ));
            if !req.notes.is_empty() {
                out.push_str(&format!("    Note: {}\n", req.notes));
            }
        }
        out.push('\n');
    }

    if progress.electives_remaining > 0 {
        let subs: Vec<String> = reqs
            .electives
            .substitutions
            .iter()
            .map(|s| format!("{} {}", s.course_code, s.name))
            .collect();
        out.push_str(&format!(
            "ELECTIVES NEEDED: {left} more required (courses matching {pattern}; up to {max} \
             may be substituted by: {subs})\n\n",
            left = progress.electives_remaining,
            pattern = reqs.electives.pattern,
            max = reqs.electives.max_substitutions,
            subs = join_or(&subs, "none"),
        ));
    }

    out
}

pub fn build_user_prompt(
    student: &StudentContext<'_>,
    semester: Semester,
    candidates: &[Course],
) -> String {
    let name = or_default(student.name, "Student");
    let major = or_default(student.major, "Undeclared");
    let career_path = or_default(student.career_path, "Not specified");
    let excluded = join_or(student.excluded, "None");
    let side = join_or(student.side_interests, "None");

    let mut out = format!(
        "Please recommend 4-6 courses for {name} for {semester}.\n\n\
         STUDENT PROFILE:\n\
         - Major: {major}\n\
         - Year: {year}\n\
         - Career Path: {career_path}\n\
         - Interests: {interests}\n\
         - Side Interests: {side}\n\
         - Completed or Planned Courses: {excluded}\n\n",
        year = or_default(student.year, "Unknown"),
        interests = join_or(student.interests, "Not specified"),
    );

    if let Some(progress) = student.progress {
        out.push_str(&major_section(progress));
    }

    out.push_str(&format!("AVAILABLE COURSES ({} total):\n", candidates.len()));
    for course in candidates.iter().take(MAX_PROMPT_COURSES) {
        out.push_str(&course_block(course));
    }
    if candidates.len() > MAX_PROMPT_COURSES {
        out.push_str(&format!(
            "\n... and {} more courses available.\n",
            candidates.len() - MAX_PROMPT_COURSES
        ));
    }

    out.push_str(&format!(
        r#"
RECOMMENDATION PRIORITIES (in order of importance):
1. Major alignment: prefer courses that move the student through the "{major}" major,
   remaining core requirements first. Courses from other departments are fine when they
   directly support the career path or interests, as long as major requirements keep
   progressing.
2. Career path: within the major, prefer courses that build toward "{career_path}".
   Do not pick generic courses when career-specific ones are available.
3. Side interests: include 1-2 courses connected to {side_interests}.
4. Difficulty balance: mix easy (1-2), medium (3) and challenging (4-5) courses.
5. Sequencing: keep a logical progression through prerequisite chains.

CONSTRAINTS:
- Do not recommend courses the student has completed or already planned: {excluded}
- Only recommend courses from the AVAILABLE COURSES list.
- Recommend 4-6 courses, aiming for {min}-{max} total credits.

RESPONSE FORMAT:
Return a JSON object with this structure:
{{
  "courses": [
    {{
      "course_code": "CSCI-UA.0101",
      "title": "Introduction to Computer Science",
      "credits": 4,
      "reasoning": "How this course serves the career path and interests"
    }}
  ]
}}

Each reasoning must say why the course matters for this student's goals."#,
        side_interests = join_or(student.side_interests, "no stated side interests"),
        min = TARGET_CREDITS_MIN,
        max = TARGET_CREDITS_MAX,
    ));

    out
}
