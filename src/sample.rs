use crate::tasks::{DayKey, SeedTask, TaskDraft, TaskKind};
use time::macros::date;
use time::Date;

/// A small demonstration agenda for the first half of May 2024, loaded by
/// `--sample`
pub(crate) fn sample_tasks() -> Vec<SeedTask> {
    vec![
        sample(
            date!(2024 - 05 - 06),
            "09:30",
            "Team meeting",
            TaskKind::Work,
            "Align the sprint deliverables",
        ),
        sample(
            date!(2024 - 05 - 07),
            "18:00",
            "Pilates class",
            TaskKind::Wellbeing,
            "Bring a water bottle",
        ),
        sample(
            date!(2024 - 05 - 07),
            "16:00",
            "Submit monthly report",
            TaskKind::Work,
            "Send it to the finance team",
        ),
        sample(
            date!(2024 - 05 - 09),
            "20:00",
            "Ana's birthday",
            TaskKind::Personal,
            "Dinner at the Italian place",
        ),
    ]
}

fn sample(date: Date, time: &str, title: &str, kind: TaskKind, notes: &str) -> SeedTask {
    SeedTask {
        day: DayKey::for_date(&date),
        id: None,
        draft: TaskDraft {
            title: title.to_owned(),
            time: time.to_owned(),
            kind,
            notes: notes.to_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::{TaskId, TaskStore};

    #[test]
    fn test_sample_seeds_store() {
        let store = TaskStore::seeded(sample_tasks()).unwrap();
        assert_eq!(store.len(), 4);
        let may7 = store.tasks_for(&DayKey::for_date(&date!(2024 - 05 - 07)));
        let times = may7.iter().map(|t| t.time.as_str()).collect::<Vec<_>>();
        assert_eq!(times, ["16:00", "18:00"]);
        assert!(!store.has_tasks(&DayKey::for_date(&date!(2024 - 05 - 08))));
    }

    #[test]
    fn test_sample_merges_with_config_tasks() {
        let mut seeds = sample_tasks();
        seeds.push(SeedTask {
            day: DayKey::for_date(&date!(2024 - 05 - 06)),
            id: None,
            draft: TaskDraft {
                title: String::from("Lunch"),
                time: String::from("12:00"),
                ..TaskDraft::default()
            },
        });
        let store = TaskStore::seeded(seeds).unwrap();
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_sample_alongside_config_ids() {
        let mut seeds = vec![SeedTask {
            day: DayKey::for_date(&date!(2024 - 05 - 08)),
            id: Some(TaskId::new("1")),
            draft: TaskDraft {
                title: String::from("Dentist"),
                time: String::from("08:15"),
                ..TaskDraft::default()
            },
        }];
        seeds.extend(sample_tasks());
        let store = TaskStore::seeded(seeds).unwrap();
        assert_eq!(store.len(), 5);
        let may8 = store.tasks_for(&DayKey::for_date(&date!(2024 - 05 - 08)));
        assert_eq!(may8.len(), 1);
        assert_eq!(may8[0].id, TaskId::new("1"));
    }
}
