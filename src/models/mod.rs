mod operation;
pub use operation::*;

#[cfg(test)]
mod test;
