//! Typed resource IDs for compute scale sets.

use crate::{impl_string_id, IdError};

/// Resource provider namespace for compute resources.
pub const COMPUTE_PROVIDER: &str = "Microsoft.Compute";

const SUBSCRIPTIONS: &str = "subscriptions";
const RESOURCE_GROUPS: &str = "resourceGroups";
const PROVIDERS: &str = "providers";
const SCALE_SETS: &str = "virtualMachineScaleSets";
const VIRTUAL_MACHINES: &str = "virtualMachines";

// =============================================================================
// Path Parsing
// =============================================================================

/// Cursor over the `/{name}/{value}` pairs of an ARM path.
struct Segments<'a> {
    iter: std::str::Split<'a, char>,
}

impl<'a> Segments<'a> {
    fn new(s: &'a str) -> Result<Self, IdError> {
        if s.is_empty() {
            return Err(IdError::Empty);
        }
        let rest = s.strip_prefix('/').ok_or(IdError::NotRooted)?;
        Ok(Self {
            iter: rest.split('/'),
        })
    }

    /// Consumes a `{name}/{value}` pair and returns the value.
    fn pair(&mut self, name: &'static str) -> Result<&'a str, IdError> {
        let actual = self
            .iter
            .next()
            .filter(|s| !s.is_empty())
            .ok_or(IdError::MissingSegment(name))?;

        if !actual.eq_ignore_ascii_case(name) {
            return Err(IdError::UnexpectedSegment {
                expected: name,
                actual: actual.to_string(),
            });
        }

        self.iter
            .next()
            .filter(|s| !s.is_empty())
            .ok_or(IdError::MissingSegment(name))
    }

    fn finish(self) -> Result<(), IdError> {
        let rest: Vec<&str> = self.iter.collect();
        if rest.is_empty() {
            Ok(())
        } else {
            Err(IdError::TrailingSegments(rest.join("/")))
        }
    }
}

fn check_value(segment: &'static str, value: &str) -> Result<(), IdError> {
    if value.is_empty() || value.contains('/') {
        return Err(IdError::InvalidSegmentValue {
            segment,
            value: value.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Scale Sets
// =============================================================================

/// ID of a virtual machine scale set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScaleSetId {
    subscription_id: String,
    resource_group: String,
    name: String,
}

impl ScaleSetId {
    /// Creates a scale set ID from parts known to be valid.
    ///
    /// Each part must be non-empty and free of `/`, otherwise the displayed
    /// path will not parse back. Use [`ScaleSetId::try_new`] for untrusted
    /// input.
    #[must_use]
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let id = Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            name: name.into(),
        };
        debug_assert!(id.validate().is_ok(), "invalid scale set ID parts: {id:?}");
        id
    }

    /// Creates a scale set ID, rejecting parts that would not survive a
    /// display/parse cycle.
    pub fn try_new(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, IdError> {
        let id = Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            name: name.into(),
        };
        id.validate()?;
        Ok(id)
    }

    fn validate(&self) -> Result<(), IdError> {
        check_value(SUBSCRIPTIONS, &self.subscription_id)?;
        check_value(RESOURCE_GROUPS, &self.resource_group)?;
        check_value(SCALE_SETS, &self.name)
    }

    /// Parses a scale set ID from its ARM path.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let mut segments = Segments::new(s)?;
        let id = Self::parse_from(&mut segments)?;
        segments.finish()?;
        Ok(id)
    }

    fn parse_from(segments: &mut Segments<'_>) -> Result<Self, IdError> {
        let subscription_id = segments.pair(SUBSCRIPTIONS)?;
        let resource_group = segments.pair(RESOURCE_GROUPS)?;

        let provider = segments.pair(PROVIDERS)?;
        if !provider.eq_ignore_ascii_case(COMPUTE_PROVIDER) {
            return Err(IdError::UnexpectedSegment {
                expected: COMPUTE_PROVIDER,
                actual: provider.to_string(),
            });
        }

        let name = segments.pair(SCALE_SETS)?;
        Ok(Self::new(subscription_id, resource_group, name))
    }

    /// Returns the subscription ID.
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// Returns the resource group name.
    pub fn resource_group(&self) -> &str {
        &self.resource_group
    }

    /// Returns the scale set name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ID of VM `instance_id` within this scale set.
    #[must_use]
    pub fn vm(&self, instance_id: u64) -> ScaleSetVmId {
        ScaleSetVmId {
            scale_set: self.clone(),
            instance_id,
        }
    }
}

impl std::fmt::Display for ScaleSetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "/{SUBSCRIPTIONS}/{}/{RESOURCE_GROUPS}/{}/{PROVIDERS}/{COMPUTE_PROVIDER}/{SCALE_SETS}/{}",
            self.subscription_id, self.resource_group, self.name
        )
    }
}

impl_string_id!(ScaleSetId);

// =============================================================================
// Scale Set VMs
// =============================================================================

/// ID of a single VM inside a scale set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScaleSetVmId {
    scale_set: ScaleSetId,
    instance_id: u64,
}

impl ScaleSetVmId {
    /// Parses a scale set VM ID from its ARM path.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let mut segments = Segments::new(s)?;
        let scale_set = ScaleSetId::parse_from(&mut segments)?;

        let raw = segments.pair(VIRTUAL_MACHINES)?;
        let instance_id = raw
            .parse::<u64>()
            .map_err(|_| IdError::InvalidInstanceId(raw.to_string()))?;

        segments.finish()?;
        Ok(Self {
            scale_set,
            instance_id,
        })
    }

    /// Returns the owning scale set.
    pub fn scale_set(&self) -> &ScaleSetId {
        &self.scale_set
    }

    /// Returns the VM's index within the scale set.
    pub const fn instance_id(&self) -> u64 {
        self.instance_id
    }
}

impl std::fmt::Display for ScaleSetVmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{VIRTUAL_MACHINES}/{}",
            self.scale_set, self.instance_id
        )
    }
}

impl_string_id!(ScaleSetVmId);

// =============================================================================
// Tests
// =============================================================================
