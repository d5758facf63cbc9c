use crate::entities::{Container, Item, PackInstance};
use crate::geometry::primitives::Dims3;
use crate::io::ext_repr::{ExtBin, ExtInstance, ExtItem};
use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use log::warn;

/// Converts external representations of items and bins into internal ones,
/// validating and optionally quantizing the input.
#[derive(Clone, Debug, Copy)]
pub struct Importer {
    /// Number of decimals to which imported dimensions and weights are rounded.
    /// If undefined, values are taken as-is.
    pub n_decimals: Option<u8>,
}

impl Importer {
    pub fn new(n_decimals: Option<u8>) -> Importer {
        Importer { n_decimals }
    }

    pub fn import_instance(&self, ext_instance: &ExtInstance) -> Result<PackInstance> {
        ensure!(
            ext_instance.items.iter().map(|item| &item.id).all_unique(),
            "duplicate item ids in instance"
        );

        let bin = self.import_bin(&ext_instance.bin)?;
        let items = ext_instance
            .items
            .iter()
            .enumerate()
            .map(|(id, ext_item)| self.import_item(id, ext_item))
            .collect::<Result<Vec<Item>>>()?;

        Ok(PackInstance::new(items, bin))
    }

    pub fn import_item(&self, id: usize, ext_item: &ExtItem) -> Result<Item> {
        ensure!(!ext_item.id.is_empty(), "item with empty id");

        let dims = Dims3::try_new(
            self.quantize(ext_item.length),
            self.quantize(ext_item.width),
            self.quantize(ext_item.height),
        )
        .with_context(|| format!("invalid dimensions for item {}", ext_item.id))?;

        let weight = self.quantize(ext_item.weight);
        ensure!(
            weight.is_finite() && weight >= 0.0,
            "invalid weight for item {}: {}",
            ext_item.id,
            ext_item.weight
        );

        if !ext_item.stackable && ext_item.load_capacity.is_some() {
            warn!(
                "load capacity of non-stackable item {} is ignored, nothing may rest on it",
                ext_item.id
            );
        }

        let load_capacity = match ext_item.load_capacity {
            Some(cap) => {
                ensure!(
                    cap.is_finite() && cap >= 0.0,
                    "invalid load capacity for item {}: {cap}",
                    ext_item.id
                );
                cap
            }
            None => f32::INFINITY,
        };

        Ok(Item::new(
            id,
            ext_item.id.clone(),
            dims,
            weight,
            ext_item.stackable,
            load_capacity,
            ext_item.priority,
        ))
    }

    pub fn import_bin(&self, ext_bin: &ExtBin) -> Result<Container> {
        let dims = Dims3::try_new(
            self.quantize(ext_bin.length),
            self.quantize(ext_bin.width),
            self.quantize(ext_bin.height),
        )
        .context("invalid bin dimensions")?;

        let weight_limit = self.quantize(ext_bin.weight_limit);
        ensure!(
            weight_limit.is_finite() && weight_limit > 0.0,
            "invalid bin weight limit: {}",
            ext_bin.weight_limit
        );

        Ok(Container::new(0, dims, weight_limit))
    }

    fn quantize(&self, value: f32) -> f32 {
        match self.n_decimals {
            Some(d) => {
                let scale = 10_f32.powi(d as i32);
                (value * scale).round() / scale
            }
            None => value,
        }
    }
}
