use crate::file_reader;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_depth_limit::ast;
use graphql_depth_limit::DepthLimitRule;
use graphql_depth_limit::DocumentValidationContext;
use graphql_depth_limit::IgnorePolicy;
use graphql_depth_limit::IgnoreRule;
use std::collections::HashSet;
use std::error::Error;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

const ANONYMOUS_OPERATION_LABEL: &str = "<anonymous>";

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Names of fields to leave out of depth accounting, along with \
             everything selected beneath them.",
        long="ignore",
        value_delimiter = ',',
    )]
    ignore_fields: Vec<String>,

    #[arg(
        help="Regular expressions matched against field names. Fields whose \
             name contains a match are left out of depth accounting, along \
             with everything selected beneath them.",
        long="ignore-pattern",
    )]
    ignore_patterns: Vec<String>,

    #[arg(
        help="Maximum number of nested field levels an operation may select.",
        long,
        short='d',
        value_parser=clap::value_parser!(u32).range(1..),
    )]
    max_depth: u32,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files whose operations need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

impl CheckCmd {
    fn build_rule(&self) -> Result<DepthLimitRule, Box<dyn Error>> {
        let mut ignore = IgnorePolicy::default();
        for field_name in &self.ignore_fields {
            ignore.push(IgnoreRule::exact(field_name.trim()));
        }
        for pattern in &self.ignore_patterns {
            ignore.push(IgnoreRule::pattern(pattern)?);
        }
        log::debug!("Configured ignore rules: {:?}", ignore.rules());

        Ok(DepthLimitRule::new(self.max_depth)?.with_ignore(ignore))
    }

    /// Find all GraphQL files recursively located at or under each path
    /// passed as an arg.
    fn find_graphql_files(
        &self,
        errors: &mut Vec<Box<dyn Error>>,
    ) -> (Vec<PathBuf>, usize) {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_non_graphql_files: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }

                        log::trace!("Found file at {path:#?}.");
                        let is_graphql_file =
                            path.extension()
                                .map(|ext| ext.to_string_lossy())
                                .is_some_and(|ext| graphql_file_exts.contains(&*ext));
                        if is_graphql_file {
                            file_paths.push(path.to_path_buf());
                        } else {
                            num_non_graphql_files += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(Box::new(e));
                    },
                }
            }
        }

        // If the user specifies a single file path as an argument, presume the
        // user explicitly wants that file checked as a GraphQL file -- even if
        // its file extension doesn't match one of the `graphql_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to check {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_non_graphql_files = num_non_graphql_files.saturating_sub(1);
            file_paths.push(first_arg_path.to_owned());
        }

        file_paths.sort();
        (file_paths, num_non_graphql_files)
    }
}

/// Outcome of checking the operations of a single file.
struct FileCheck {
    num_operations: usize,
    num_violations: usize,
    output: Vec<String>,
}

fn check_file(
    rule: &DepthLimitRule,
    file_path: &Path,
) -> Result<FileCheck, Box<dyn Error>> {
    let content = file_reader::read_content(file_path)?;
    let document = ast::query::parse(&content)
        .map_err(|err| format!("Failed to parse {}: {err}", file_path.display()))?;

    let mut context =
        DocumentValidationContext::new(&document)
            .with_file_path(file_path);
    let report = rule.check(&mut context)?;
    let errors = context.into_errors();

    let status =
        if errors.is_empty() {
            output_utils::GREEN_CHECK
        } else {
            output_utils::RED_X
        };
    let mut output = vec![format!("{status} {}", file_path.display())];
    for (operation_key, depth) in report.iter() {
        let label =
            if operation_key.is_empty() {
                ANONYMOUS_OPERATION_LABEL
            } else {
                operation_key
            };
        output.push(format!("    {label}: depth {depth}"));
    }
    for error in &errors {
        output.push(format!("    {error}"));
    }

    Ok(FileCheck {
        num_operations: report.len(),
        num_violations: errors.len(),
        output,
    })
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let rule = match self.build_rule() {
            Ok(rule) => rule,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Invalid depth-limit configuration: {e}",
                output_utils::RED_X,
            )),
        };

        let mut errors: Vec<Box<dyn Error>> = vec![];
        let (file_paths, num_non_graphql_files) =
            self.find_graphql_files(&mut errors);
        log::debug!(
            "Found {} GraphQL files to be checked.",
            file_paths.len(),
        );

        let mut output = vec![];
        let mut num_operations = 0;
        let mut num_violations = 0;
        let mut num_files_with_violations = 0;
        for file_path in &file_paths {
            match check_file(&rule, file_path) {
                Ok(file_check) => {
                    num_operations += file_check.num_operations;
                    num_violations += file_check.num_violations;
                    if file_check.num_violations > 0 {
                        num_files_with_violations += 1;
                    }
                    output.extend(file_check.output);
                },
                Err(e) => errors.push(e),
            }
        }
        let stdout = output.join("\n");

        if !errors.is_empty() {
            return CommandResult::failure(Some(stdout), format_args!(
                "{} Errors while checking GraphQL files:\n{}",
                output_utils::RED_X,
                errors.iter()
                    .map(|e| format!("  * {e}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ));
        }

        if num_violations > 0 {
            return CommandResult::failure(Some(stdout), format_args!(
                "{} {num_violations} operations in {num_files_with_violations} \
                files exceed the maximum operation depth of {}.",
                output_utils::RED_X,
                rule.max_depth(),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{}\n",
                "{} All operations are within the maximum operation depth of {}:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Measured {} operations.",
            ),
            stdout,
            output_utils::GREEN_CHECK,
            rule.max_depth(),
            file_paths.len(),
            num_non_graphql_files,
            num_operations,
        ))
    }
}
