//! Display-ready view of a timeline result.
//!
//! Resolves person and task IDs to display names through external lookup
//! collaborators and groups segments into Gantt rows. No scheduling
//! computation happens here.
//!
//! # Rows
//!
//! | Grouping | Order |
//! |----------|-------|
//! | One row per (task, person) | tasks by first appearance, then persons by first appearance within the task |
//! | One cell per day | `1..=project_duration` |
//! | Bars within a cell | emission order |
//! | Person and task lines | by ID: numeric IDs ascending by value, then other IDs lexicographically |

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::{ReferenceKind, Result, TimelineError};
use crate::models::{Segment, Task, TaskSpan, TimelineResult};

/// Looks up person display names.
pub trait PersonnelDirectory {
    /// Display name of `person_id`, if known.
    fn person_name(&self, person_id: &str) -> Option<&str>;
}

/// Looks up task display names.
pub trait TaskDirectory {
    /// Display name of `task_id`, if known.
    fn task_name(&self, task_id: &str) -> Option<&str>;
}

impl PersonnelDirectory for HashMap<String, String> {
    fn person_name(&self, person_id: &str) -> Option<&str> {
        self.get(person_id).map(String::as_str)
    }
}

impl PersonnelDirectory for BTreeMap<String, String> {
    fn person_name(&self, person_id: &str) -> Option<&str> {
        self.get(person_id).map(String::as_str)
    }
}

impl TaskDirectory for HashMap<String, String> {
    fn task_name(&self, task_id: &str) -> Option<&str> {
        self.get(task_id).map(String::as_str)
    }
}

impl TaskDirectory for BTreeMap<String, String> {
    fn task_name(&self, task_id: &str) -> Option<&str> {
        self.get(task_id).map(String::as_str)
    }
}

impl TaskDirectory for [Task] {
    fn task_name(&self, task_id: &str) -> Option<&str> {
        self.iter()
            .find(|t| t.id == task_id)
            .map(|t| t.name.as_str())
    }
}

/// One bar inside a Gantt cell.
#[derive(Debug, Clone, PartialEq)]
pub struct GanttBar {
    /// Hour offset within the day.
    pub start_hour: f64,
    /// Hours covered.
    pub duration: f64,
}

impl GanttBar {
    /// Left offset as a fraction of the day.
    pub fn offset_fraction(&self, day_capacity: f64) -> f64 {
        self.start_hour / day_capacity
    }

    /// Width as a fraction of the day.
    pub fn width_fraction(&self, day_capacity: f64) -> f64 {
        self.duration / day_capacity
    }
}

/// Gantt row for one (task, person) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct GanttRow {
    pub task_id: String,
    pub task_name: String,
    pub person_id: String,
    pub person_name: String,
    /// Bars per day; index 0 is day 1.
    pub days: Vec<Vec<GanttBar>>,
}

impl GanttRow {
    /// Bars on a 1-based day (empty if out of range).
    pub fn bars_on(&self, day: u32) -> &[GanttBar] {
        day.checked_sub(1)
            .and_then(|i| self.days.get(i as usize))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total hours shown in this row.
    pub fn total_hours(&self) -> f64 {
        self.days.iter().flatten().map(|b| b.duration).sum()
    }
}

/// Workload line for one person.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonHours {
    pub person_id: String,
    pub name: String,
    pub hours: f64,
}

impl fmt::Display for PersonHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} hours", self.name, self.hours)
    }
}

/// Duration line for one task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskLine {
    pub task_id: String,
    pub name: String,
    pub span: TaskSpan,
}

impl fmt::Display for TaskLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} hours (Day {} Hour {} - Day {} Hour {})",
            self.name,
            self.span.duration,
            self.span.start.day,
            self.span.start.hour,
            self.span.end.day,
            self.span.end.hour
        )
    }
}

/// Timeline result with display names resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineReport {
    pub project_duration: u32,
    pub rows: Vec<GanttRow>,
    pub personnel: Vec<PersonHours>,
    pub tasks: Vec<TaskLine>,
}

impl TimelineReport {
    /// Builds a report, failing on the first ID without a display name.
    ///
    /// # Errors
    /// [`TimelineError::UnresolvedReference`] naming the unresolved ID.
    pub fn resolve<P, T>(result: &TimelineResult, personnel: &P, tasks: &T) -> Result<Self>
    where
        P: PersonnelDirectory + ?Sized,
        T: TaskDirectory + ?Sized,
    {
        let person_ids = result
            .personnel_hours
            .keys()
            .chain(result.timeline.iter().map(|s| &s.person_id));
        for id in person_ids {
            if personnel.person_name(id).is_none() {
                return Err(TimelineError::UnresolvedReference {
                    kind: ReferenceKind::Person,
                    id: id.clone(),
                });
            }
        }

        let task_ids = result
            .task_durations
            .keys()
            .chain(result.timeline.iter().map(|s| &s.task_id));
        for id in task_ids {
            if tasks.task_name(id).is_none() {
                return Err(TimelineError::UnresolvedReference {
                    kind: ReferenceKind::Task,
                    id: id.clone(),
                });
            }
        }

        Ok(Self::build(
            result,
            |id| personnel.person_name(id).unwrap_or_default().to_string(),
            |id| tasks.task_name(id).unwrap_or_default().to_string(),
        ))
    }

    /// Builds a report, labelling unknown IDs as `Person <id>` / `Task <id>`.
    pub fn resolve_lenient<P, T>(result: &TimelineResult, personnel: &P, tasks: &T) -> Self
    where
        P: PersonnelDirectory + ?Sized,
        T: TaskDirectory + ?Sized,
    {
        Self::build(
            result,
            |id| match personnel.person_name(id) {
                Some(name) => name.to_string(),
                None => format!("Person {id}"),
            },
            |id| match tasks.task_name(id) {
                Some(name) => name.to_string(),
                None => format!("Task {id}"),
            },
        )
    }

    fn build<FP, FT>(result: &TimelineResult, person_name: FP, task_name: FT) -> Self
    where
        FP: Fn(&str) -> String,
        FT: Fn(&str) -> String,
    {
        let mut personnel: Vec<PersonHours> = result
            .personnel_hours
            .iter()
            .map(|(id, &hours)| PersonHours {
                person_id: id.clone(),
                name: person_name(id),
                hours,
            })
            .collect();
        personnel.sort_by(|a, b| id_order(&a.person_id, &b.person_id));

        let mut tasks: Vec<TaskLine> = result
            .task_durations
            .iter()
            .map(|(id, span)| TaskLine {
                task_id: id.clone(),
                name: task_name(id),
                span: span.clone(),
            })
            .collect();
        tasks.sort_by(|a, b| id_order(&a.task_id, &b.task_id));

        Self {
            project_duration: result.project_duration,
            rows: gantt_rows(
                &result.timeline,
                result.project_duration,
                &person_name,
                &task_name,
            ),
            personnel,
            tasks,
        }
    }

    /// Rows belonging to one task.
    pub fn rows_for_task(&self, task_id: &str) -> Vec<&GanttRow> {
        self.rows.iter().filter(|r| r.task_id == task_id).collect()
    }
}

impl fmt::Display for TimelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project Duration: {} days", self.project_duration)?;
        writeln!(f, "Personnel Work Hours:")?;
        for line in &self.personnel {
            writeln!(f, "  {line}")?;
        }
        writeln!(f, "Task Durations:")?;
        for line in &self.tasks {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

/// Orders IDs so integer-keyed records list as `9, 10` rather than `10, 9`.
fn id_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

fn gantt_rows(
    segments: &[Segment],
    project_duration: u32,
    person_name: &dyn Fn(&str) -> String,
    task_name: &dyn Fn(&str) -> String,
) -> Vec<GanttRow> {
    let mut task_rank: HashMap<&str, usize> = HashMap::new();
    let mut row_index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut rows: Vec<(usize, GanttRow)> = Vec::new();

    for seg in segments {
        let next_rank = task_rank.len();
        let rank = *task_rank.entry(seg.task_id.as_str()).or_insert(next_rank);

        let key = (seg.task_id.as_str(), seg.person_id.as_str());
        let idx = match row_index.get(&key) {
            Some(&idx) => idx,
            None => {
                rows.push((
                    rank,
                    GanttRow {
                        task_id: seg.task_id.clone(),
                        task_name: task_name(&seg.task_id),
                        person_id: seg.person_id.clone(),
                        person_name: person_name(&seg.person_id),
                        days: vec![Vec::new(); project_duration as usize],
                    },
                ));
                row_index.insert(key, rows.len() - 1);
                rows.len() - 1
            }
        };

        if let Some(cell) = seg
            .day
            .checked_sub(1)
            .and_then(|i| rows[idx].1.days.get_mut(i as usize))
        {
            cell.push(GanttBar {
                start_hour: seg.start_hour,
                duration: seg.duration,
            });
        }
    }

    // Stable: persons keep first-appearance order within each task.
    rows.sort_by_key(|(rank, _)| *rank);
    rows.into_iter().map(|(_, row)| row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::TimelineEngine;

    fn sample() -> (Vec<Task>, TimelineResult) {
        let tasks = vec![
            Task::new("1")
                .with_name("Design")
                .with_assignment("10", 5.0)
                .with_assignment("20", 3.0),
            Task::new("2").with_name("Build").with_assignment("10", 5.0),
        ];
        let result = TimelineEngine::new().compute(&tasks).unwrap();
        (tasks, result)
    }

    fn people() -> HashMap<String, String> {
        HashMap::from([
            ("10".to_string(), "Alice".to_string()),
            ("20".to_string(), "Bob".to_string()),
        ])
    }

    #[test]
    fn test_resolve_names() {
        let (tasks, result) = sample();
        let report = TimelineReport::resolve(&result, &people(), tasks.as_slice()).unwrap();

        assert_eq!(report.project_duration, 2);
        assert_eq!(report.personnel[0].name, "Alice");
        assert_eq!(report.personnel[0].hours, 10.0);
        assert_eq!(report.tasks[1].name, "Build");
    }

    #[test]
    fn test_unresolved_person() {
        let (tasks, result) = sample();
        let mut directory = people();
        directory.remove("20");

        let err = TimelineReport::resolve(&result, &directory, tasks.as_slice()).unwrap_err();
        assert_eq!(
            err,
            TimelineError::UnresolvedReference {
                kind: ReferenceKind::Person,
                id: "20".into(),
            }
        );
    }

    #[test]
    fn test_unresolved_task() {
        let (_, result) = sample();
        let names = BTreeMap::from([("1".to_string(), "Design".to_string())]);

        let err = TimelineReport::resolve(&result, &people(), &names).unwrap_err();
        assert!(matches!(
            err,
            TimelineError::UnresolvedReference { kind: ReferenceKind::Task, ref id } if id == "2"
        ));
    }

    #[test]
    fn test_lenient_fallback_names() {
        let (_, result) = sample();
        let empty: HashMap<String, String> = HashMap::new();
        let report = TimelineReport::resolve_lenient(&result, &empty, &empty);

        assert_eq!(report.personnel[0].name, "Person 10");
        assert_eq!(report.tasks[0].name, "Task 1");
        assert_eq!(report.rows[0].person_name, "Person 10");
    }

    #[test]
    fn test_gantt_rows_grouping() {
        let (tasks, result) = sample();
        let report = TimelineReport::resolve(&result, &people(), tasks.as_slice()).unwrap();

        let keys: Vec<_> = report
            .rows
            .iter()
            .map(|r| (r.task_id.as_str(), r.person_id.as_str()))
            .collect();
        assert_eq!(keys, vec![("1", "10"), ("1", "20"), ("2", "10")]);

        let build_rows = report.rows_for_task("2");
        let build = build_rows[0];
        assert_eq!(build.days.len(), 2);
        assert_eq!(
            build.bars_on(1),
            &[GanttBar {
                start_hour: 5.0,
                duration: 3.0
            }]
        );
        assert_eq!(build.bars_on(2).len(), 1);
        assert!(build.bars_on(0).is_empty());
        assert!(build.bars_on(3).is_empty());
        assert_eq!(build.total_hours(), 5.0);
    }

    #[test]
    fn test_bar_fractions() {
        let bar = GanttBar {
            start_hour: 2.0,
            duration: 4.0,
        };
        assert!((bar.offset_fraction(8.0) - 0.25).abs() < 1e-10);
        assert!((bar.width_fraction(8.0) - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_display_lines() {
        let (tasks, result) = sample();
        let report = TimelineReport::resolve(&result, &people(), tasks.as_slice()).unwrap();

        assert_eq!(report.personnel[1].to_string(), "Bob: 3 hours");
        assert_eq!(
            report.tasks[1].to_string(),
            "Build: 5 hours (Day 1 Hour 0 - Day 2 Hour 2)"
        );
        let text = report.to_string();
        assert!(text.starts_with("Project Duration: 2 days\n"));
        assert!(text.contains("  Alice: 10 hours\n"));
    }

    #[test]
    fn test_lines_in_numeric_id_order() {
        let tasks = vec![
            Task::new("10").with_name("Ten").with_assignment("10", 1.0),
            Task::new("9").with_name("Nine").with_assignment("9", 1.0),
            Task::new("x").with_name("Ex").with_assignment("bob", 1.0),
            Task::new("2").with_name("Two").with_assignment("2", 1.0),
        ];
        let result = TimelineEngine::new().compute(&tasks).unwrap();
        let empty: HashMap<String, String> = HashMap::new();
        let report = TimelineReport::resolve_lenient(&result, &empty, tasks.as_slice());

        let task_ids: Vec<_> = report.tasks.iter().map(|t| t.task_id.as_str()).collect();
        assert_eq!(task_ids, vec!["2", "9", "10", "x"]);
        let person_ids: Vec<_> = report
            .personnel
            .iter()
            .map(|p| p.person_id.as_str())
            .collect();
        assert_eq!(person_ids, vec!["2", "9", "10", "bob"]);
    }

    #[test]
    fn test_id_order_ties() {
        assert_eq!(id_order("7", "7"), Ordering::Equal);
        // Same value, different spelling: still a total order.
        assert_eq!(id_order("07", "7"), Ordering::Less);
        assert_eq!(id_order("alice", "bob"), Ordering::Less);
    }

    #[test]
    fn test_empty_result_report() {
        let empty: HashMap<String, String> = HashMap::new();
        let report = TimelineReport::resolve(&TimelineResult::new(), &empty, &empty).unwrap();
        assert!(report.rows.is_empty());
        assert!(report.personnel.is_empty());
        assert!(report.tasks.is_empty());
    }
}
