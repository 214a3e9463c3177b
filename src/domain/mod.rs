// Domain layer: the item set value type. No dependencies beyond std and serde.

pub mod itemset;
