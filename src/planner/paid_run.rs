use crate::planner::Calendar;
use crate::time::{Date, DateRange};

/// Returns the length of the longest run of leave dates, where two leave
/// dates belong to the same run if every date strictly between them is an
/// off day.
///
/// Weekends and holidays bridge a run, but they are not counted. An empty
/// slice has a run of `0`, a single date a run of `1`.
#[must_use]
pub fn longest_paid_run(calendar: &Calendar, leave_dates: &[Date]) -> usize {
    if leave_dates.is_empty() {
        return 0;
    }

    let mut dates = leave_dates.to_vec();
    dates.sort_unstable();

    let mut longest = 1;
    let mut current = 1;

    for pair in dates.windows(2) {
        let (previous, next) = (pair[0], pair[1]);

        let is_bridged = DateRange::new(previous.next(), next)
            .take_while(|date| *date < next)
            .all(|date| calendar.is_off(date));

        if is_bridged {
            current += 1;
        } else {
            current = 1;
        }

        longest = longest.max(current);
    }

    longest
}
