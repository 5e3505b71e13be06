use crate::format::*;
use crate::names::*;
use crate::*;
use log::LevelFilter;
use serde::Deserialize;

extern crate serde_yaml;
extern crate simple_logging;

#[derive(Deserialize)]
struct Fixture {
    #[serde(default)]
    options: RenderOptions,
    variables: Vec<FixtureVariable>,
    expected: FixtureExpectations,
}

#[derive(Deserialize)]
struct FixtureVariable {
    name: String,
    #[serde(default)]
    bounds: Vec<String>,
    variance: Option<KModifier>,
    #[serde(default)]
    reified: bool,
    #[serde(default)]
    nullable: bool,
    #[serde(default)]
    definitely_non_nullable: bool,
}

#[derive(Deserialize)]
struct FixtureExpectations {
    declaration: Option<String>,
    #[serde(rename = "where", default)]
    where_clause: String,
    error: Option<String>,
}

fn bound(source: &str) -> TypeResult<TypeName> {
    let (name, nullable) = match source.strip_suffix('?') {
        Some(name) => (name, true),
        None => (source, false),
    };
    Ok(ClassName::best_guess(name)?.with_nullable(nullable).into())
}

fn build(variable: &FixtureVariable) -> TypeResult<TypeVariableName> {
    let bounds = variable
        .bounds
        .iter()
        .map(|b| bound(b))
        .collect::<TypeResult<Vec<_>>>()?;

    let mut built = TypeVariableName::with_variance_and_bounds(
        variable.name.as_str(),
        variable.variance,
        bounds,
    )?
    .with_reified(variable.reified);
    if variable.nullable {
        built = built.with_nullable(true)?;
    }
    if variable.definitely_non_nullable {
        built = built.definitely_non_nullable()?;
    }
    Ok(built)
}

#[test]
fn fixtures() {
    simple_logging::log_to_stderr(LevelFilter::Debug);

    let mut failures = vec![];

    for entry in glob::glob("src/__fixtures__/*.yml").unwrap() {
        let entry = entry.unwrap();

        let fixture_name = entry
            .file_name()
            .and_then(std::ffi::OsStr::to_str)
            .unwrap()
            .to_string();
        if fixture_name.starts_with('_') {
            continue;
        }

        let fixture: Fixture =
            serde_yaml::from_reader(std::fs::File::open(&entry).unwrap()).unwrap();

        let variables = fixture
            .variables
            .iter()
            .map(build)
            .collect::<TypeResult<Vec<_>>>();

        match (variables, &fixture.expected.error) {
            (Ok(variables), None) => {
                let clause = TypeVariableClause::render(&variables, &fixture.options);

                if let Some(ref declaration) = fixture.expected.declaration {
                    if &clause.declaration != declaration {
                        failures.push(format!(
                            "{}:\nExpected declaration: {}\n  Actual declaration: {}",
                            fixture_name, declaration, clause.declaration
                        ));
                    }
                }
                if clause.where_clause != fixture.expected.where_clause {
                    failures.push(format!(
                        "{}:\nExpected where clause: {}\n  Actual where clause: {}",
                        fixture_name, fixture.expected.where_clause, clause.where_clause
                    ));
                }
            }
            (Ok(_), Some(expected)) => failures.push(format!(
                "{}: Expected {} but the variables were built",
                fixture_name, expected
            )),
            (Err(error), None) => {
                failures.push(format!("{}: Unexpected error: {:?}", fixture_name, error))
            }
            (Err(error), Some(expected)) => {
                let name: &'static str = (&error).into();
                if name != expected {
                    failures.push(format!(
                        "{}:\nExpected error: {}\n  Actual error: {:?}",
                        fixture_name, expected, error
                    ));
                }
            }
        }
    }

    assert!(failures.is_empty(), "\n\n{}", failures.join("\n\n"));
}
