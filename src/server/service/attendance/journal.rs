//! Attendance aggregation.
//!
//! Pure functions turning attendance entries into journals, per-student rows and
//! group statistics. Percentages count only `present` records:
//! `round(present * 100 / total)`, and 0 when a student has no records.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use entity::attendance::AttendanceStatus;

use crate::server::model::{
    attendance::{AttendanceEntry, Journal, StudentAttendance},
    group::AttendanceTotals,
    teaching_assignment::TeachingAssignment,
};

/// Rounded share of present records, 0 when there are none.
pub fn percentage(present: usize, total: usize) -> i32 {
    if total == 0 {
        return 0;
    }

    (present as f64 * 100.0 / total as f64).round() as i32
}

fn present_count(entries: &[&AttendanceEntry]) -> usize {
    entries
        .iter()
        .filter(|e| e.status == AttendanceStatus::Present)
        .count()
}

/// Builds one student's row from their records.
///
/// When a student has several lessons on one date, the status of the later lesson
/// is shown for that date. Every record still counts towards the percentage.
pub fn student_attendance(
    student_id: i32,
    full_name: String,
    entries: &[&AttendanceEntry],
) -> StudentAttendance {
    let mut ordered = entries.to_vec();
    ordered.sort_by_key(|e| (e.date, e.lesson_number));

    let attendance = ordered.iter().map(|e| (e.date, e.status)).collect();

    StudentAttendance {
        student_id,
        full_name,
        attendance,
        percentage: percentage(present_count(entries), entries.len()),
    }
}

/// Groups entries by teaching assignment and builds one journal per assignment,
/// ordered by assignment id.
///
/// # Arguments
/// - `entries` - Attendance records joined with their lessons
/// - `assignments` - Resolved assignments keyed by id; entries of unknown assignments are skipped
/// - `names` - Student full names keyed by student id
pub fn build_journals(
    entries: &[AttendanceEntry],
    assignments: &HashMap<i32, TeachingAssignment>,
    names: &HashMap<i32, String>,
) -> Vec<Journal> {
    let mut by_assignment: BTreeMap<i32, Vec<&AttendanceEntry>> = BTreeMap::new();
    for entry in entries {
        by_assignment
            .entry(entry.teaching_assignment_id)
            .or_default()
            .push(entry);
    }

    by_assignment
        .into_iter()
        .filter_map(|(id, entries)| {
            let assignment = assignments.get(&id)?;
            Some(build_journal(assignment, &entries, names))
        })
        .collect()
}

/// Builds the journal of one assignment from its records.
///
/// Students are those with at least one record, ordered by full name.
pub fn build_journal(
    assignment: &TeachingAssignment,
    entries: &[&AttendanceEntry],
    names: &HashMap<i32, String>,
) -> Journal {
    let last_lesson = entries.iter().map(|e| (e.date, e.lesson_number)).max();

    let mut by_student: BTreeMap<i32, Vec<&AttendanceEntry>> = BTreeMap::new();
    for entry in entries {
        by_student.entry(entry.student_id).or_default().push(entry);
    }

    let mut students: Vec<StudentAttendance> = by_student
        .into_iter()
        .map(|(student_id, entries)| {
            let name = names.get(&student_id).cloned().unwrap_or_default();
            student_attendance(student_id, name, &entries)
        })
        .collect();
    students.sort_by(|a, b| {
        a.full_name
            .cmp(&b.full_name)
            .then(a.student_id.cmp(&b.student_id))
    });

    Journal {
        teaching_assignment_id: assignment.teaching_assignment_id,
        last_lesson,
        subject_name: assignment.subject_name.clone(),
        teacher_full_name: assignment.teacher_full_name(),
        group_code: assignment.group_code.clone(),
        students,
    }
}

/// Builds one row per roster student, in roster order, including students
/// without any records.
pub fn summarize_students(
    roster: &[(i32, String)],
    entries: &[AttendanceEntry],
) -> Vec<StudentAttendance> {
    let mut by_student: HashMap<i32, Vec<&AttendanceEntry>> = HashMap::new();
    for entry in entries {
        by_student.entry(entry.student_id).or_default().push(entry);
    }

    roster
        .iter()
        .map(|(student_id, name)| {
            let entries = by_student.remove(student_id).unwrap_or_default();
            student_attendance(*student_id, name.clone(), &entries)
        })
        .collect()
}

/// Rounded mean of student percentages, 0 for an empty list.
pub fn average_percentage(students: &[StudentAttendance]) -> i32 {
    if students.is_empty() {
        return 0;
    }

    let sum: i32 = students.iter().map(|s| s.percentage).sum();
    (sum as f64 / students.len() as f64).round() as i32
}

/// Counts distinct lessons and records per status.
pub fn totals(entries: &[AttendanceEntry]) -> AttendanceTotals {
    let lessons: BTreeSet<i32> = entries.iter().map(|e| e.schedule_id).collect();

    let count = |status: AttendanceStatus| entries.iter().filter(|e| e.status == status).count() as i32;

    AttendanceTotals {
        lessons: lessons.len() as i32,
        present: count(AttendanceStatus::Present),
        absent: count(AttendanceStatus::Absent),
        late: count(AttendanceStatus::Late),
    }
}

/// Percentage of present records per `YYYY-MM`.
pub fn monthly_percentages(entries: &[AttendanceEntry]) -> BTreeMap<String, i32> {
    let mut by_month: BTreeMap<String, Vec<&AttendanceEntry>> = BTreeMap::new();
    for entry in entries {
        by_month
            .entry(entry.date.format("%Y-%m").to_string())
            .or_default()
            .push(entry);
    }

    by_month
        .into_iter()
        .map(|(month, entries)| (month, percentage(present_count(&entries), entries.len())))
        .collect()
}
