// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Problem inputs: the sample universe and the run parameters.

pub mod parameters;
pub mod universe;

pub use parameters::Parameters;
pub use universe::Universe;
