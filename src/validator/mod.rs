use crate::circuit::CircuitDefinition;
use crate::error::ValidationError;
use crate::schema::BlockRegistry;
use ahash::AHashSet;

mod cycle;

/// Whether validation stops at the first problem or reports everything.
/// Fail-fast suits pre-flight checks; collect-all suits editor feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    FailFast,
    #[default]
    CollectAll,
}

/// Outcome of validating one circuit.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    issues: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[ValidationError] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationError> {
        self.issues
    }

    pub fn into_result(self) -> Result<(), Vec<ValidationError>> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(self.issues)
        }
    }
}

/// Structural validation over a circuit: identifiers and kinds, edge
/// endpoints (against each node's live port set), the single-writer rule
/// for input ports, acyclicity, and setting schemas — in that order.
///
/// Usable standalone for live editor feedback; the executor also runs it
/// before every execution.
pub struct Validator<'a> {
    registry: &'a BlockRegistry,
}

impl<'a> Validator<'a> {
    pub fn new(registry: &'a BlockRegistry) -> Self {
        Self { registry }
    }

    pub fn validate(&self, circuit: &CircuitDefinition) -> ValidationReport {
        self.validate_with(circuit, ValidationMode::CollectAll)
    }

    pub fn validate_with(
        &self,
        circuit: &CircuitDefinition,
        mode: ValidationMode,
    ) -> ValidationReport {
        let mut issues = Vec::new();

        let phases: [fn(&Self, &CircuitDefinition, &mut Vec<ValidationError>); 5] = [
            Self::check_identifiers,
            Self::check_edges,
            Self::check_single_writer,
            Self::check_cycles,
            Self::check_settings,
        ];

        for phase in phases {
            phase(self, circuit, &mut issues);
            if mode == ValidationMode::FailFast && !issues.is_empty() {
                issues.truncate(1);
                break;
            }
        }

        ValidationReport { issues }
    }

    fn check_identifiers(
        &self,
        circuit: &CircuitDefinition,
        issues: &mut Vec<ValidationError>,
    ) {
        let mut node_ids = AHashSet::new();
        for node in &circuit.nodes {
            if !node_ids.insert(node.id.as_str()) {
                issues.push(ValidationError::DuplicateNodeId(node.id.clone()));
            }
            if !self.registry.contains(&node.kind) {
                issues.push(ValidationError::UnknownKind {
                    node_id: node.id.clone(),
                    kind: node.kind.clone(),
                });
            }
        }

        let mut edge_ids = AHashSet::new();
        for edge in &circuit.edges {
            if !edge_ids.insert(edge.id.as_str()) {
                issues.push(ValidationError::DuplicateEdgeId(edge.id.clone()));
            }
        }
    }

    /// Every edge endpoint must name an existing node and a port its kind
    /// declares. Port sets are re-derived from each node's current
    /// settings, so dynamically sized kinds are checked against their live
    /// layout.
    fn check_edges(&self, circuit: &CircuitDefinition, issues: &mut Vec<ValidationError>) {
        for edge in &circuit.edges {
            for (node_id, port, is_source) in [
                (&edge.source, &edge.source_port, true),
                (&edge.target, &edge.target_port, false),
            ] {
                let Some(node) = circuit.node(node_id) else {
                    issues.push(ValidationError::DanglingEdge {
                        edge_id: edge.id.clone(),
                        node_id: node_id.clone(),
                    });
                    continue;
                };
                // Unknown kinds are already reported; no ports to check.
                let Some(behavior) = self.registry.get(&node.kind) else {
                    continue;
                };
                let ports = if is_source {
                    behavior.output_ports(&node.settings)
                } else {
                    behavior.input_ports(&node.settings)
                };
                if !ports.iter().any(|p| p.name == *port) {
                    issues.push(ValidationError::UnknownPort {
                        edge_id: edge.id.clone(),
                        node_id: node_id.clone(),
                        port: port.clone(),
                    });
                }
            }
        }
    }

    fn check_single_writer(
        &self,
        circuit: &CircuitDefinition,
        issues: &mut Vec<ValidationError>,
    ) {
        let mut seen = AHashSet::new();
        for edge in &circuit.edges {
            if !seen.insert((edge.target.as_str(), edge.target_port.as_str())) {
                issues.push(ValidationError::DuplicateInputEdge {
                    node_id: edge.target.clone(),
                    port: edge.target_port.clone(),
                });
            }
        }
    }

    fn check_cycles(&self, circuit: &CircuitDefinition, issues: &mut Vec<ValidationError>) {
        if let Some(node_ids) = cycle::find_cycle(circuit) {
            issues.push(ValidationError::CycleDetected { node_ids });
        }
    }

    fn check_settings(&self, circuit: &CircuitDefinition, issues: &mut Vec<ValidationError>) {
        for node in &circuit.nodes {
            let Some(behavior) = self.registry.get(&node.kind) else {
                continue;
            };
            for spec in behavior.settings_spec() {
                if let Err(issue) = spec.check(&node.id, &node.settings) {
                    issues.push(issue);
                }
            }
        }
    }
}
