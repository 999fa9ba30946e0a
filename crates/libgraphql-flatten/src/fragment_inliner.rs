use crate::find_spreads;
use crate::FlattenError;
use crate::FragmentDefinition;
use crate::FragmentSpread;
use indexmap::IndexMap;

/// Replaces fragment spreads with fragment bodies until none remain.
///
/// The inliner owns a working copy of every fragment body. Each pass
/// substitutes every spread in the current operation text *and* in every
/// body in the mapping, so a fragment that spreads another fragment
/// becomes fully expanded as it is used — this is what makes nesting of
/// arbitrary depth come out right without recursion.
///
/// Passes are bounded by the number of fragment definitions plus one: an
/// acyclic reference graph is guaranteed to converge within that many
/// passes, so exceeding the bound means the remaining spreads form a
/// cycle.
pub struct FragmentInliner {
    /// Working copies of the fragment bodies, progressively expanded in
    /// place as passes absorb their nested spreads.
    bodies: IndexMap<String, String>,
}

impl FragmentInliner {
    /// Creates an inliner over the given fragment definitions.
    pub fn new(fragments: &IndexMap<String, FragmentDefinition<'_>>) -> Self {
        let bodies = fragments
            .iter()
            .map(|(name, definition)| (name.clone(), definition.body().to_string()))
            .collect();
        Self { bodies }
    }

    /// Runs fixed-point substitution over `operation_text` and returns the
    /// spread-free result. The fragment mapping is consumed; nothing
    /// outlives the substitution.
    ///
    /// # Errors
    ///
    /// - [`FlattenError::UnknownFragment`] if any spread names a fragment
    ///   absent from the mapping.
    /// - [`FlattenError::UnresolvedSpreads`] if the operation text still
    ///   contains spreads after the iteration bound.
    pub fn inline(mut self, operation_text: &str) -> Result<String, FlattenError> {
        let max_passes = self.bodies.len() + 1;
        let mut operation = operation_text.to_string();
        let mut completed_passes = 0;

        loop {
            let spreads = find_spreads(&operation)?;
            log::debug!(
                "Inlining pass {completed_passes}: {} fragment spread(s) remaining \
                 in the operation text.",
                spreads.len(),
            );
            if spreads.is_empty() {
                return Ok(operation);
            }
            if completed_passes >= max_passes {
                return Err(FlattenError::UnresolvedSpreads {
                    names: distinct_names(&spreads),
                });
            }

            operation = substitute(&operation, &spreads, &self.bodies)?;
            self.expand_bodies()?;
            completed_passes += 1;
        }
    }

    /// Applies one substitution pass to every fragment body in the
    /// mapping.
    fn expand_bodies(&mut self) -> Result<(), FlattenError> {
        let names: Vec<String> = self.bodies.keys().cloned().collect();
        for name in names {
            let Some(body) = self.bodies.get(&name).cloned() else {
                continue;
            };
            let spreads = find_spreads(&body)?;
            if spreads.is_empty() {
                continue;
            }
            let expanded = substitute(&body, &spreads, &self.bodies)?;
            self.bodies.insert(name, expanded);
        }
        Ok(())
    }
}

/// Rebuilds `text` with each spread replaced by the referenced fragment's
/// current body. Spliced bodies are padded with a space on both sides so
/// they never glue onto neighboring tokens.
fn substitute(
    text: &str,
    spreads: &[FragmentSpread<'_>],
    bodies: &IndexMap<String, String>,
) -> Result<String, FlattenError> {
    let mut output = String::with_capacity(text.len());
    let mut copied_up_to = 0;
    for spread in spreads {
        let Some(body) = bodies.get(spread.name) else {
            return Err(FlattenError::UnknownFragment {
                name: spread.name.to_string(),
            });
        };
        output.push_str(&text[copied_up_to..spread.span.start]);
        output.push(' ');
        output.push_str(body.trim());
        output.push(' ');
        copied_up_to = spread.span.end;
    }
    output.push_str(&text[copied_up_to..]);
    Ok(output)
}

/// Returns the distinct spread names in first-occurrence order.
fn distinct_names(spreads: &[FragmentSpread<'_>]) -> Vec<String> {
    let mut names: Vec<String> = vec![];
    for spread in spreads {
        if !names.iter().any(|name| name == spread.name) {
            names.push(spread.name.to_string());
        }
    }
    names
}
