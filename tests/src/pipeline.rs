mod exposure;
mod resolution;
mod script;
