//! Runs `#[derive(SubsetLayout)]` on struct definitions from a `test_data/*.ron` file,
//! checking the generated code or the errors against the expectations in that file.

use std::{
    collections::BTreeMap,
    fmt::{self, Display},
    path::Path,
};

use core_extensions::{SelfOps, StringExt};

use proc_macro2::TokenStream as TokenStream2;

use regex::Regex;

use serde::{de::Error as _, Deserialize, Deserializer};

mod text_replacement;

use self::text_replacement::replace_text;

////////////////////////////////////////////////////////////////////////////////

/// The derive cases of one `test_data/*.ron` file.
#[derive(Debug, Deserialize)]
pub(crate) struct DeriveCases {
    cases: Vec<DeriveCase>,
}

/// A struct definition with `{placeholder}`s,
/// derived once per subcase.
#[derive(Debug, Deserialize)]
struct DeriveCase {
    name: String,
    code: String,
    subcase: Vec<Subcase>,
}

#[derive(Debug, Deserialize)]
struct Subcase {
    /// What each `{placeholder}` in the code is replaced with.
    #[serde(default)]
    replacements: BTreeMap<String, String>,

    /// Every one of these must match the generated code,
    /// or the error messages if the derive failed.
    #[serde(default)]
    find_all: Vec<Matcher>,

    error_count: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Matcher {
    Str(String),
    #[serde(deserialize_with = "deserialize_regex")]
    Regex(Regex),
    /// The string occurs exactly this many times.
    Count(String, usize),
    Not(Box<Matcher>),
}

fn deserialize_regex<'de, D>(deserializer: D) -> Result<Regex, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer)?
        .piped(|s| Regex::new(&s))
        .map_err(D::Error::custom)
}

impl Matcher {
    fn matches(&self, text: &str) -> bool {
        match self {
            Matcher::Str(s) => text.contains(s.as_str()),
            Matcher::Regex(regex) => regex.is_match(text),
            Matcher::Count(s, count) => text.matches(s.as_str()).count() == *count,
            Matcher::Not(matcher) => !matcher.matches(text),
        }
    }
}

impl Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Str(s) => write!(f, "{:?}", s),
            Matcher::Regex(regex) => write!(f, "regex {:?}", regex.as_str()),
            Matcher::Count(s, count) => write!(f, "{:?} {} times", s, count),
            Matcher::Not(matcher) => write!(f, "not {}", matcher),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// What the derive produced for one subcase.
enum Derived {
    Code(String),
    Errors(Vec<String>),
}

impl Derived {
    fn new(result: Result<TokenStream2, syn::Error>) -> Self {
        match result {
            Ok(tokens) => Derived::Code(tokens.to_string()),
            Err(e) => e
                .into_iter()
                .map(|e| e.to_string())
                .collect::<Vec<String>>()
                .piped(Derived::Errors),
        }
    }

    fn error_count(&self) -> usize {
        match self {
            Derived::Code(_) => 0,
            Derived::Errors(errors) => errors.len(),
        }
    }

    /// The text that `find_all` is matched against.
    fn searched_text(&self) -> String {
        match self {
            Derived::Code(code) => code.clone(),
            Derived::Errors(errors) => errors.join("\n"),
        }
    }
}

struct Failure<'a> {
    case: &'a str,
    input: String,
    derived: Derived,
    expected_errors: usize,
    unmatched: Vec<&'a Matcher>,
}

impl Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "case '{}' failed", self.case)?;
        writeln!(f, "  input:\n{}", self.input.trim().left_padder(4))?;
        writeln!(
            f,
            "  errors: {} (expected {})",
            self.derived.error_count(),
            self.expected_errors,
        )?;
        for matcher in &self.unmatched {
            writeln!(f, "  did not match: {}", matcher)?;
        }
        writeln!(f, "  output:\n{}", self.derived.searched_text().left_padder(4))
    }
}

impl DeriveCases {
    pub(crate) fn load(file_name: &str) -> Self {
        let path = Path::new("./test_data/").join(format!("{}.ron", file_name));
        let file = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("could not read {}: {}", path.display(), e));
        ron::de::from_str(&file)
            .unwrap_or_else(|e| panic!("could not parse {}: {}", path.display(), e))
    }

    /// Runs `derive` on every subcase,panicking after all of them ran if any failed.
    pub(crate) fn run<F>(&self, mut derive: F)
    where
        F: FnMut(&str) -> Result<TokenStream2, syn::Error>,
    {
        let mut failures = Vec::new();

        for case in &self.cases {
            for subcase in &case.subcase {
                let mut input = String::new();
                replace_text(&case.code, &subcase.replacements, &mut input);

                let derived = Derived::new(derive(&input));
                let text = derived.searched_text();

                let unmatched = subcase
                    .find_all
                    .iter()
                    .filter(|m| !m.matches(&text))
                    .collect::<Vec<&Matcher>>();

                if derived.error_count() != subcase.error_count || !unmatched.is_empty() {
                    failures.push(Failure {
                        case: &case.name,
                        input,
                        derived,
                        expected_errors: subcase.error_count,
                        unmatched,
                    });
                }
            }
        }

        for failure in &failures {
            eprintln!("{}", failure);
        }
        assert!(failures.is_empty(), "{} derive subcases failed", failures.len());
    }
}
