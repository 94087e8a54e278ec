use crate::shared::error::MonitorError;
use crate::shared::Result;
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// Kind of catalogue entity a monitor view is filtered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    All,
    Product,
    Team,
    ServiceArea,
}

impl ScopeKind {
    /// The case-sensitive path segment used by the HTTP surface
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeKind::All => "all",
            ScopeKind::Product => "product",
            ScopeKind::Team => "team",
            ScopeKind::ServiceArea => "serviceArea",
        }
    }
}

impl FromStr for ScopeKind {
    type Err = MonitorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "all" => Ok(ScopeKind::All),
            "product" => Ok(ScopeKind::Product),
            "team" => Ok(ScopeKind::Team),
            "serviceArea" => Ok(ScopeKind::ServiceArea),
            _ => Err(MonitorError::InvalidScope {
                kind: s.to_string(),
                reason: "unknown scope kind, expected one of: all, product, team, serviceArea"
                    .to_string(),
            }),
        }
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Positive catalogue id of a scoped entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(NonZeroU64);

impl ScopeId {
    pub fn new(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(Self)
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monitor scope: everything, or the components under one product, team or service area.
///
/// Scoped variants always carry a valid id. Invalid input never degrades to
/// `All`; it is rejected with `MonitorError::InvalidScope`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonitorScope {
    All,
    Product(ScopeId),
    Team(ScopeId),
    ServiceArea(ScopeId),
}

impl MonitorScope {
    /// Parses a scope from its path segments.
    ///
    /// The id is ignored for `all`. For every other kind it is required and
    /// must be a positive integer.
    pub fn parse(kind: &str, id: Option<&str>) -> Result<Self> {
        let kind = ScopeKind::from_str(kind)?;
        if kind == ScopeKind::All {
            return Ok(MonitorScope::All);
        }

        let raw = id.ok_or_else(|| MonitorError::InvalidScope {
            kind: kind.to_string(),
            reason: "a scope id is required".to_string(),
        })?;

        let id = raw
            .parse::<u64>()
            .ok()
            .and_then(ScopeId::new)
            .ok_or_else(|| MonitorError::InvalidScope {
                kind: kind.to_string(),
                reason: format!("scope id '{}' is not a positive integer", raw),
            })?;

        Ok(Self::scoped(kind, id))
    }

    fn scoped(kind: ScopeKind, id: ScopeId) -> Self {
        match kind {
            ScopeKind::All => MonitorScope::All,
            ScopeKind::Product => MonitorScope::Product(id),
            ScopeKind::Team => MonitorScope::Team(id),
            ScopeKind::ServiceArea => MonitorScope::ServiceArea(id),
        }
    }

    pub fn kind(&self) -> ScopeKind {
        match self {
            MonitorScope::All => ScopeKind::All,
            MonitorScope::Product(_) => ScopeKind::Product,
            MonitorScope::Team(_) => ScopeKind::Team,
            MonitorScope::ServiceArea(_) => ScopeKind::ServiceArea,
        }
    }

    pub fn id(&self) -> Option<ScopeId> {
        match self {
            MonitorScope::All => None,
            MonitorScope::Product(id) | MonitorScope::Team(id) | MonitorScope::ServiceArea(id) => {
                Some(*id)
            }
        }
    }
}

impl fmt::Display for MonitorScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id() {
            Some(id) => write!(f, "{}/{}", self.kind(), id),
            None => write!(f, "{}", self.kind()),
        }
    }
}
