//! Registry of every sample, in tour order.

use crate::config::TourConfig;
use crate::error::{SampleError, SampleResult};
use crate::samples::{functions, max_finder, numeric, patterns, strings, types, visibility};

pub type RunFn = fn(&TourConfig) -> SampleResult<String>;

#[derive(Debug, Clone, Copy)]
pub struct SampleInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub run: RunFn,
}

impl SampleInfo {
    pub fn run(&self, config: &TourConfig) -> SampleResult<String> {
        (self.run)(config)
    }
}

pub static SAMPLES: &[SampleInfo] = &[
    SampleInfo {
        id: "max-finder",
        title: "Borrowed Maximum",
        summary: "Return a read-only reference to the largest element",
        run: run_max_finder,
    },
    SampleInfo {
        id: "numeric",
        title: "Generic Numbers",
        summary: "Arithmetic over a numeric trait bound and pointer-sized integers",
        run: run_numeric,
    },
    SampleInfo {
        id: "patterns",
        title: "Slice and String Patterns",
        summary: "Match on sequence shape and string constants",
        run: run_patterns,
    },
    SampleInfo {
        id: "strings",
        title: "Raw Strings",
        summary: "Raw string literals and multi-line formatting",
        run: run_strings,
    },
    SampleInfo {
        id: "visibility",
        title: "Private Types and Type Names",
        summary: "Module-private types and short type names",
        run: run_visibility,
    },
    SampleInfo {
        id: "functions",
        title: "Functions as Values",
        summary: "Function items as arguments, optional arguments and results",
        run: run_functions,
    },
    SampleInfo {
        id: "types",
        title: "Type Aliases and Fixed Buffers",
        summary: "Aliases, required fields, defaults and const-generic buffers",
        run: run_types,
    },
];

pub fn find(id: &str) -> SampleResult<&'static SampleInfo> {
    SAMPLES
        .iter()
        .find(|sample| sample.id == id)
        .ok_or_else(|| SampleError::UnknownSample(id.to_string()))
}

/// Samples named by `config.samples` in catalog order, or all when empty.
pub fn selected(config: &TourConfig) -> SampleResult<Vec<&'static SampleInfo>> {
    if config.samples.is_empty() {
        return Ok(SAMPLES.iter().collect());
    }
    for id in &config.samples {
        find(id)?;
    }
    Ok(SAMPLES
        .iter()
        .filter(|sample| config.samples.iter().any(|id| id == sample.id))
        .collect())
}

// =============================================================================
// Sample runners
// =============================================================================

fn run_max_finder(config: &TourConfig) -> SampleResult<String> {
    let values = &config.max_finder.values;
    let index = max_finder::find_max_position(values)?;
    let max = max_finder::find_max(values)?;

    Ok(format!("values: {:?}\nmax: {} (index {})", values, max, index))
}

fn run_numeric(_config: &TourConfig) -> SampleResult<String> {
    let ints = numeric::MathOperations::<i32>::new();
    let floats = numeric::MathOperations::<f64>::new();
    let native = numeric::NativeInt::new(10).checked_add(numeric::NativeInt::new(20))?;

    Ok(format!(
        "2 + 3 = {}\n2.5 + 3.5 = {}\nnative 10 + 20 = {}",
        ints.add(2, 3),
        floats.add(2.5, 3.5),
        native
    ))
}

fn run_patterns(_config: &TourConfig) -> SampleResult<String> {
    let mut lines = Vec::new();
    for numbers in [vec![1, 2, 3, 4, 5], vec![4, 5, 6]] {
        lines.push(format!(
            "{:?} starts with [1, 2, 3]: {}",
            numbers,
            patterns::starts_with_one_two_three(&numbers)
        ));
    }
    for province in ["QC", "NB", "ON"] {
        lines.push(format!("{} speaks French: {}", province, patterns::speaks_french(province)));
    }
    Ok(lines.join("\n"))
}

fn run_strings(config: &TourConfig) -> SampleResult<String> {
    let value = strings::parse_json_sample()?;
    let greeting = &config.greeting;
    Ok(format!(
        "{}\nparsed name: {}\n{}",
        strings::format_json_string(),
        value["name"],
        strings::format_welcome_message(&greeting.name, greeting.date)
    ))
}

fn run_visibility(_config: &TourConfig) -> SampleResult<String> {
    Ok(format!(
        "{}\nnested type: {}",
        visibility::PublicGreeter::new().use_file_local(),
        visibility::NameScope::new().nested_type_name()
    ))
}

fn run_functions(config: &TourConfig) -> SampleResult<String> {
    let greeting = functions::greeting(Some(config.greeting.name.as_str())).unwrap_or_default();
    Ok(format!(
        "calculate(20, 10, add) = {}\nincrement_by(3) = {}\nincrement_by(3, 2) = {}\n{}",
        functions::calculate(20, 10, functions::add),
        functions::increment_by(3, None),
        functions::increment_by(3, Some(2)),
        greeting
    ))
}

fn run_types(_config: &TourConfig) -> SampleResult<String> {
    let person = types::RequiredPersonBuilder::new().name("Bob").age(25).build();
    let mut buffer = types::create_buffer10();
    for i in 0..buffer.len() {
        buffer.set(i, i as i32)?;
    }

    Ok(format!(
        "names: {:?}\nnumbers: {:?}\nperson: {} ({})\npoint: {:?}\nbuffer: {:?}",
        types::names(),
        types::numbers_list(),
        person.name,
        person.age,
        types::Point::default(),
        buffer.as_slice()
    ))
}
