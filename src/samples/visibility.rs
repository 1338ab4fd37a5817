//! Module-private types and compile-time type names.

// Not exported: only code in this module can name it
struct FileLocalGreeter;

impl FileLocalGreeter {
    fn message(&self) -> &'static str {
        "Hello from a file-local class!"
    }
}

#[derive(Debug, Default)]
pub struct PublicGreeter;

impl PublicGreeter {
    pub fn new() -> Self {
        PublicGreeter
    }

    pub fn use_file_local(&self) -> String {
        FileLocalGreeter.message().to_string()
    }
}

/// Last path segment of `T`'s type name, without generic arguments.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[derive(Debug, Default)]
pub struct NameScope;

struct NestedType;

impl NameScope {
    pub fn new() -> Self {
        NameScope
    }

    pub fn nested_type_name(&self) -> &'static str {
        short_type_name::<NestedType>()
    }
}
