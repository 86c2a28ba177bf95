//! Parsing of bash `times` output.
//!
//! The shell builtin prints two lines (shell user/sys, children user/sys); hooks
//! join the four values with `;`, e.g. `0m0.012s;0m0.004s;0m1.250s;0m0.310s`.

use regex::Regex;
use std::sync::LazyLock;

static COMPONENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]+)m([0-9]+)[.,]([0-9]+)s$").expect("compiling times component regex")
});

/// User and system CPU seconds; `None` means unknown.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UserSys {
    pub user: Option<f64>,
    pub sys:  Option<f64>,
}

impl UserSys {
    pub const UNKNOWN: UserSys = UserSys { user: None, sys: None };

    /// Per-field `self - earlier`, known only where both sides are known.
    pub fn delta_since(&self, earlier: &UserSys) -> UserSys {
        UserSys {
            user: self.user.zip(earlier.user).map(|(now, then)| now - then),
            sys:  self.sys.zip(earlier.sys).map(|(now, then)| now - then),
        }
    }
}

/// Parses a `U;S;CU;CS` times string. Wrong arity yields [`UserSys::UNKNOWN`].
pub fn parse_times(times: Option<&str>) -> UserSys {
    let Some(times) = times else {
        return UserSys::UNKNOWN;
    };
    let parts: Vec<&str> = times.trim().split(';').collect();
    let [shell_user, shell_sys, child_user, child_sys] = parts.as_slice() else {
        return UserSys::UNKNOWN;
    };

    let sum = |a: &str, b: &str| Some(parse_component(a)? + parse_component(b)?);
    UserSys {
        user: sum(*shell_user, *child_user),
        sys:  sum(*shell_sys, *child_sys),
    }
}

/// Parses one `<minutes>m<seconds>[.,]<fraction>s` component into seconds.
///
/// Matching is case-insensitive and the whole component must match. The fraction
/// digits are taken as thousandths regardless of how many there are.
pub fn parse_component(component: &str) -> Option<f64> {
    let caps = COMPONENT.captures(component.trim())?;
    let number = |i: usize| caps.get(i)?.as_str().parse::<f64>().ok();

    let minutes = number(1)?;
    let seconds = number(2)?;
    let fraction = number(3)?;
    Some(minutes * 60.0 + seconds + fraction * 0.001)
}
