mod properties;
mod serialization;
