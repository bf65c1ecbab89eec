pub mod input_box;
pub mod loading;
pub mod notice;
pub mod task_form;
pub mod task_table;
pub mod utils;
pub mod weather;

pub use input_box::InputBox;
pub use loading::Loading;
pub use notice::Notice;
pub use task_form::TaskForm;
pub use task_table::TaskTable;
pub use utils::*;
pub use weather::WeatherPane;
