use std::cmp::Ordering;

/// Compare two version fragments the way rpm's `rpmvercmp()` does.
///
/// Both strings are walked left to right in segments, where a segment is a maximal run of ASCII
/// digits or of ASCII letters. Anything that is neither alphanumeric nor `~` only separates
/// segments and is otherwise ignored.
///
/// * `~` sorts before everything else, including the end of the string, so `1.0~rc1` is older
///   than `1.0`.
/// * A numeric segment is always newer than an alphabetic one.
/// * Numeric segments are compared by digit count once leading zeroes are dropped, then
///   lexically, so arbitrarily long numbers never overflow.
/// * Alphabetic segments are compared bytewise.
/// * If every segment matched, whichever string still has characters left is newer.
///
/// Returns `Greater` if `a` is newer than `b`, `Less` if it is older.
pub fn rpmvercmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let mut a_part = a;
    let mut b_part = b;

    let not_alphanumeric_or_tilde = |c: char| !c.is_ascii_alphanumeric() && c != '~';

    loop {
        a_part = a_part.trim_start_matches(not_alphanumeric_or_tilde);
        b_part = b_part.trim_start_matches(not_alphanumeric_or_tilde);

        match (a_part.strip_prefix('~'), b_part.strip_prefix('~')) {
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (Some(rest_a), Some(rest_b)) => {
                a_part = rest_a;
                b_part = rest_b;
                continue;
            }
            (None, None) => (),
        }

        if a_part.is_empty() || b_part.is_empty() {
            break;
        }

        let is_numeric = a_part.starts_with(|c: char| c.is_ascii_digit());
        let (segment_a, rest_a) = if is_numeric {
            split_leading(a_part, |c| c.is_ascii_digit())
        } else {
            split_leading(a_part, |c| c.is_ascii_alphabetic())
        };
        let (segment_b, rest_b) = if is_numeric {
            split_leading(b_part, |c| c.is_ascii_digit())
        } else {
            split_leading(b_part, |c| c.is_ascii_alphabetic())
        };

        // segments of different types: numeric is always newer than alpha
        if segment_b.is_empty() {
            return if is_numeric {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        a_part = rest_a;
        b_part = rest_b;

        if is_numeric {
            let segment_a = segment_a.trim_start_matches('0');
            let segment_b = segment_b.trim_start_matches('0');

            let ordering = segment_a
                .len()
                .cmp(&segment_b.len())
                .then_with(|| segment_a.cmp(segment_b));
            if ordering != Ordering::Equal {
                return ordering;
            }
        } else {
            let ordering = segment_a.cmp(segment_b);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
    }

    a_part.len().cmp(&b_part.len())
}

/// Split off the leading run of characters matching `pat`, which may be empty
fn split_leading<F>(string: &str, pat: F) -> (&str, &str)
where
    F: Fn(char) -> bool,
{
    string.split_at(string.find(|c: char| !pat(c)).unwrap_or(string.len()))
}

/// Compare two optional EVR fields like `compare_values()` in rpm's python bindings.
///
/// An absent value sorts below any present one; two present values go through [`rpmvercmp`].
pub fn compare_values(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (Some(a), Some(b)) => rpmvercmp(a, b),
    }
}
