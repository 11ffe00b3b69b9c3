// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tenure computation.
//!
//! Tenure is **derived**, never stored as authoritative. It is computed at
//! day resolution from the date of joining to the exit date (for exited
//! resources) or to an explicit as-of date, so identical inputs always give
//! identical results.

use crate::types::DeploymentRecord;
use time::Date;

/// Computes tenure in whole days.
///
/// The end date is `exit_date` when set, otherwise `as_of`. A date of
/// joining in the future of the end date yields zero, not a negative span.
#[must_use]
pub fn tenure_days(doj: Date, exit_date: Option<Date>, as_of: Date) -> i64 {
    let end: Date = exit_date.unwrap_or(as_of);
    let days: i64 = (end - doj).whole_days();
    days.max(0)
}

/// Computes the tenure of a deployment record in whole days.
///
/// Exited records are pinned to their exit date; active records run to
/// `as_of`.
#[must_use]
pub fn record_tenure_days(record: &DeploymentRecord, as_of: Date) -> i64 {
    tenure_days(record.placement.doj, record.exit_date, as_of)
}
