//! The fetch → preprocess → resolve → deliver pipeline.
//!
//! Ordering is enforced by construction: the prefix index is built from
//! the fetched payload before any query is resolved, and answers go out
//! only after the whole batch resolved. A batch with any invalid range is
//! aborted; nothing is posted for it.

use rangerelay_client::{ClientError, RelayClient};
use rangerelay_engine::{EngineError, PrefixIndex, QueryKind, RangeQuery};
use rangerelay_protocol::{QueryType, WireQuery};

use crate::exit_codes;

/// CLI-boundary error: message plus the exit code it maps to.
#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        let code = match err {
            ClientError::MalformedInput(_) => exit_codes::EXIT_MALFORMED_INPUT,
            ClientError::Transport(_) | ClientError::Http(_, _) => {
                exit_codes::EXIT_TRANSPORT
            }
        };
        CliError {
            code,
            message: err.to_string(),
            hint: None,
        }
    }
}

impl From<EngineError> for CliError {
    fn from(err: EngineError) -> Self {
        CliError {
            code: exit_codes::EXIT_RANGE_OUT_OF_BOUNDS,
            message: err.to_string(),
            hint: None,
        }
    }
}

/// Options resolved from flags/environment by `main`.
pub struct SolveOptions {
    pub input_url: String,
    pub output_url: Option<String>,
    pub dry_run: bool,
    pub quiet: bool,
}

/// Run the whole pipeline once.
pub fn run(opts: &SolveOptions) -> Result<(), CliError> {
    let output_url = opts.output_url.clone().unwrap_or_default();
    let client = RelayClient::new(opts.input_url.clone(), output_url);

    let payload = client.fetch_input()?;
    if !opts.quiet {
        eprintln!(
            "fetched {} values, {} queries",
            payload.data.len(),
            payload.query.len(),
        );
    }

    let queries = decode_queries(&payload.query)?;
    let index = PrefixIndex::build(&payload.data);
    let answers = index.resolve_all(&queries)?;

    if opts.dry_run {
        let body = serde_json::to_string(&answers).map_err(|e| CliError {
            code: exit_codes::EXIT_ERROR,
            message: format!("failed to encode answers: {}", e),
            hint: None,
        })?;
        println!("{}", body);
        return Ok(());
    }

    client.deliver(&payload.token, &answers)?;
    if !opts.quiet {
        eprintln!("delivered {} answers", answers.len());
    }
    Ok(())
}

/// Map wire queries to engine queries.
///
/// Negative range endpoints cannot be represented as indices; they get
/// the same out-of-bounds classification the resolver uses, so the
/// whole-batch abort policy applies uniformly.
fn decode_queries(wire: &[WireQuery]) -> Result<Vec<RangeQuery>, CliError> {
    wire.iter()
        .map(|q| {
            let [l, r] = q.range;
            let lo = usize::try_from(l).map_err(|_| negative_range(l, r))?;
            let hi = usize::try_from(r).map_err(|_| negative_range(l, r))?;
            let kind = match q.query_type {
                QueryType::Sum => QueryKind::Sum,
                QueryType::AlternatingSum => QueryKind::AlternatingSum,
            };
            Ok(RangeQuery::new(kind, lo, hi))
        })
        .collect()
}

fn negative_range(l: i64, r: i64) -> CliError {
    CliError {
        code: exit_codes::EXIT_RANGE_OUT_OF_BOUNDS,
        message: format!("query range [{}, {}] has a negative endpoint", l, r),
        hint: None,
    }
}
