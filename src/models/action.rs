use super::DraftTask;

/// Requests the UI hands to the sync engine. Each one maps to at most a few
/// HTTP calls; results come back as [`super::Event`]s.
pub enum Action {
    LoadTasks,
    CreateTask(DraftTask),
    DeleteTask(i64),
    LoadWeather,
}
