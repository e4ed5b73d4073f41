//! Static descriptors for populating test fixtures.

use std::collections::BTreeMap;

use azfake_id::{ScaleSetId, ScaleSetVmId};
use azfake_resources::{Sku, VirtualMachineScaleSet};

/// SKU given to fake scale sets.
pub const FAKE_SCALE_SET_SKU: &str = "Standard_D4_v2";

/// Capacity given to fake scale sets.
pub const FAKE_SCALE_SET_CAPACITY: i64 = 3;

pub const FAKE_SUBSCRIPTION_ID: &str = "test-subscription-id";
pub const FAKE_RESOURCE_GROUP: &str = "test-asg";
pub const FAKE_SCALE_SET_NAME: &str = "agents";

/// Build a scale set descriptor with the default SKU and capacity.
///
/// `name` and `tags` are attached verbatim.
pub fn fake_vmss_with_tags(name: &str, tags: BTreeMap<String, String>) -> VirtualMachineScaleSet {
    VirtualMachineScaleSet {
        id: None,
        name: Some(name.to_string()),
        sku: Some(Sku {
            name: Some(FAKE_SCALE_SET_SKU.to_string()),
            tier: None,
            capacity: Some(FAKE_SCALE_SET_CAPACITY),
        }),
        tags,
    }
}

/// ID of the fixture scale set.
pub fn fake_scale_set_id() -> ScaleSetId {
    ScaleSetId::new(FAKE_SUBSCRIPTION_ID, FAKE_RESOURCE_GROUP, FAKE_SCALE_SET_NAME)
}

/// ID of VM `index` in the fixture scale set.
pub fn fake_vmss_vm_id(index: u64) -> ScaleSetVmId {
    fake_scale_set_id().vm(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_vmss_with_tags() {
        let tags = BTreeMap::from([
            ("min".to_string(), "1".to_string()),
            ("max".to_string(), "5".to_string()),
        ]);

        let vmss = fake_vmss_with_tags("pool-a", tags.clone());
        assert_eq!(vmss.name.as_deref(), Some("pool-a"));
        assert_eq!(vmss.capacity(), Some(FAKE_SCALE_SET_CAPACITY));
        assert_eq!(
            vmss.sku.as_ref().and_then(|sku| sku.name.as_deref()),
            Some(FAKE_SCALE_SET_SKU)
        );
        assert_eq!(vmss.tags, tags);
    }

    #[test]
    fn test_fake_vmss_is_pure() {
        assert_eq!(
            fake_vmss_with_tags("a", BTreeMap::new()),
            fake_vmss_with_tags("a", BTreeMap::new())
        );
    }

    #[test]
    fn test_fake_vmss_vm_id() {
        let id = fake_vmss_vm_id(2);
        assert_eq!(
            id.to_string(),
            "/subscriptions/test-subscription-id/resourceGroups/test-asg/providers/Microsoft.Compute/virtualMachineScaleSets/agents/virtualMachines/2"
        );
        assert_eq!(id.scale_set(), &fake_scale_set_id());
    }
}
