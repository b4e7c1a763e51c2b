//! Generated date format space.
//!
//! Every combination of year width, month padding, day padding and field
//! ordering with a `[-/. ]` separator, the Chinese and Korean joiner forms,
//! and a compact form restricted to zero-padded month and day.

const YEAR_2: &str = r"(?:\d{2})";
const YEAR_4: &str = r"(?:[12]\d{3})";

const MONTH_PADDED: &str = r"(?:0[1-9]|1[0-2])";
const MONTH_BARE: &str = r"(?:[1-9]|1[0-2])";

const DAY_PADDED: &str = r"(?:0[1-9]|[12]\d|3[01])";
const DAY_BARE: &str = r"(?:[1-9]|[12]\d|3[01])";

const SEPARATOR: &str = r"[\-/. ]";

/// Field ordering of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ordering {
    YearMonthDay,
    DayMonthYear,
    MonthDayYear,
}

const ORDERINGS: [Ordering; 3] = [
    Ordering::YearMonthDay,
    Ordering::DayMonthYear,
    Ordering::MonthDayYear,
];

fn ordered(ordering: Ordering, year: &str, month: &str, day: &str, sep: &str) -> String {
    match ordering {
        Ordering::YearMonthDay => format!("{year}{sep}{month}{sep}{day}"),
        Ordering::DayMonthYear => format!("{day}{sep}{month}{sep}{year}"),
        Ordering::MonthDayYear => format!("{month}{sep}{day}{sep}{year}"),
    }
}

/// Build the unanchored sources of every date pattern, without duplicates.
pub(crate) fn date_sources() -> Vec<String> {
    let mut sources = Vec::new();

    for year in [YEAR_2, YEAR_4] {
        for month in [MONTH_PADDED, MONTH_BARE] {
            for day in [DAY_PADDED, DAY_BARE] {
                for ordering in ORDERINGS {
                    sources.push(ordered(ordering, year, month, day, SEPARATOR));
                }
                sources.push(format!("{year}年{month}月{day}日"));
                sources.push(format!("{year}년{month}월{day}일"));
            }
        }
    }

    // Compact forms also read as plain integers; the detector resolves that
    // overlap in favor of numbers.
    for year in [YEAR_2, YEAR_4] {
        for ordering in ORDERINGS {
            sources.push(ordered(ordering, year, MONTH_PADDED, DAY_PADDED, ""));
        }
    }

    sources
}
