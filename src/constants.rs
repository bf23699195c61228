// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Useful constants.

/// The default width of the frequency window when the user supplies a window
/// midpoint without a width \[MHz\].
pub(crate) const DEFAULT_FREQ_WINDOW_MHZ: f64 = 500.0;

/// Calendar formats accepted for user-supplied dates. Date-only strings
/// resolve to midnight UTC.
pub(crate) const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d-%b-%Y",
];
