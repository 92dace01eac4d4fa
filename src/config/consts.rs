// src/config/consts.rs
use std::time::Duration;

// Data sources
pub const DEFAULT_DATA_ROOT: &str = "data";

// Concurrency
pub const WORKERS: usize = 5; // one per bundled source
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);
pub const USER_AGENT: &str = concat!("provider_directory/", env!("CARGO_PKG_VERSION"));

// Search input
pub const DEBOUNCE_MS: u64 = 300;

// Local store (logs only; filter state is never persisted)
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Environment overrides
pub const ENV_DATA_ROOT: &str = "DIRECTORY_DATA_ROOT";
pub const ENV_DEBOUNCE_MS: &str = "DIRECTORY_DEBOUNCE_MS";
pub const ENV_FONT: &str = "DIRECTORY_FONT";

// Results container id for HTML output
pub const RESULTS_CONTAINER_ID: &str = "results";

// UI strings (Arabic only)
pub const TXT_TITLE: &str = "دليل مقدمي الخدمات الطبية";
pub const TXT_NO_RESULTS: &str = "لا توجد نتائج تطابق معايير البحث";
pub const TXT_LOAD_FAILED: &str = "حدث خطأ أثناء تحميل البيانات. يرجى تحديث الصفحة والمحاولة مرة أخرى.";
pub const TXT_RENDER_FAILED: &str = "حدث خطأ أثناء عرض النتائج";
pub const TXT_LOADING: &str = "جاري تحميل البيانات...";
pub const TXT_SEARCHING: &str = "جاري البحث...";
pub const TXT_ALL: &str = "الكل";
pub const TXT_CHOOSE: &str = "اختر...";
pub const TXT_CATEGORY: &str = "الفئة";
pub const TXT_SPECIALTY: &str = "التخصص";
pub const TXT_AREA: &str = "المنطقة";
pub const TXT_SEARCH: &str = "بحث بالاسم أو التخصص أو المنطقة";
pub const TXT_ADDRESS: &str = "العنوان";
pub const TXT_RESULTS_COUNT: &str = "عدد النتائج";
pub const TXT_RELOAD: &str = "إعادة التحميل";
