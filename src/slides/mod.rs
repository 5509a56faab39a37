pub mod deck;
pub mod formatter;
pub mod navigation;
pub mod summary;
pub mod titles;

pub use deck::{Accent, PageKind, SlidePage, StatStyle, DECK, PAGE_COUNT};
pub use formatter::{format, format_numeric, format_text, parse_numeric, FormattedStat, StatRecord};
pub use navigation::{Intent, NavState, NavigationController, NavigationState, SETTLE_DELAY};
pub use summary::{recap_lines, summarize};
pub use titles::{badges, explain, BadgeHover, TitleBadge};
