pub mod resolvable;
