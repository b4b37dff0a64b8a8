#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::ViewId;

#[cfg(feature = "std")]
pub(crate) type ViewMap<T> = HashMap<ViewId, T>;
#[cfg(not(feature = "std"))]
pub(crate) type ViewMap<T> = BTreeMap<ViewId, T>;
