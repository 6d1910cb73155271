// src/config/consts.rs

// Net config
// Pick your group at https://portal.nau.edu.ua/schedule/group/list
pub const SOURCE_URL: &str = "https://portal.nau.edu.ua/schedule/group?id=361";
pub const TIMEOUT_SECS: u64 = 5;
pub const USER_AGENT: &str = concat!("kai_week/", env!("CARGO_PKG_VERSION"));

// Query defaults
pub const DEFAULT_SUBGROUP: u8 = 2;

// Local snapshots
pub const STORE_DIR: &str = ".store";
pub const PREVIOUS_FILE: &str = "rozklad_old.html";
pub const CURRENT_FILE: &str = "rozklad_new.html";
pub const LOG_FILE: &str = "debug.log";

// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "kai_week.toml";

// Presentation
pub const NO_SCHEDULE_TEXT: &str = "Розкладу немає";
pub const NO_CLASSES_TEXT: &str = "Занять немає";
pub const ALL_SUBGROUPS_TEXT: &str = "Обидві";
pub const UNKNOWN_TEACHER_TEXT: &str = "Невідомий викладач";
pub const NO_ROOM_TEXT: &str = "Без аудиторії";
