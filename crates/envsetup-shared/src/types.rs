//! Common types

use std::collections::BTreeMap;

/// Locale tag (e.g. `en_US`) to localized text.
pub type LocalizedMap = BTreeMap<String, String>;
