//! Behavioural tests across `pin-core` and `pin-common`.

#[cfg(test)]
mod generation;
#[cfg(test)]
mod validation;
