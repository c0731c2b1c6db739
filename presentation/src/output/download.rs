//! Writing generated plans and resources to disk

use edupulse_domain::{InteractionRecord, download_file_name};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write the record's output into `dir` under its suggested file name.
///
/// Creates `dir` when needed. Fails with `InvalidInput` for tasks that have
/// no download.
pub fn save_record(dir: &Path, record: &InteractionRecord) -> io::Result<PathBuf> {
    let name = download_file_name(record).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} results cannot be saved", record.task()),
        )
    })?;

    std::fs::create_dir_all(dir)?;
    let path = dir.join(name);
    std::fs::write(&path, record.output())?;
    info!("Saved {} to {}", record.task(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use edupulse_domain::{RecordMetadata, TaskKind};

    #[test]
    fn test_saves_plan_under_suggested_name() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("plans");
        let record = InteractionRecord::new(TaskKind::StudyPlan, "World History", "Week 1: Rome");

        let path = save_record(&target, &record).unwrap();
        assert_eq!(path, target.join("study_plan_world_history.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Week 1: Rome");
    }

    #[test]
    fn test_saves_resource() {
        let dir = tempfile::tempdir().unwrap();
        let record = InteractionRecord::new(TaskKind::StudyResource, "Biology", "Q1 ...")
            .with_metadata(RecordMetadata::new().with("resource", "Practice Exam"));

        let path = save_record(dir.path(), &record).unwrap();
        assert!(path.ends_with("biology_practice_exam.txt"));
    }

    #[test]
    fn test_other_tasks_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let record = InteractionRecord::new(TaskKind::Translate, "Hello", "Hola");
        let err = save_record(dir.path(), &record).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
