//! Fixed enum-keyed maps.
//!
//! Each map stores one named field per key, so lookups are a single match
//! and every key is always present.

use serde::{Deserialize, Serialize};

use crate::enums::{Category, Neurotransmitter};

/// One value per [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryMap<T> {
    /// Value for [`Category::Sexual`].
    pub sexual: T,
    /// Value for [`Category::Social`].
    pub social: T,
    /// Value for [`Category::Pain`].
    pub pain: T,
    /// Value for [`Category::Breathwork`].
    pub breathwork: T,
    /// Value for [`Category::Food`].
    pub food: T,
    /// Value for [`Category::Rest`].
    pub rest: T,
    /// Value for [`Category::Drugs`].
    pub drugs: T,
    /// Value for [`Category::Medical`].
    pub medical: T,
    /// Value for [`Category::Life`].
    pub life: T,
}

impl<T: Copy> CategoryMap<T> {
    /// A map holding `value` for every category.
    pub const fn splat(value: T) -> Self {
        Self {
            sexual: value,
            social: value,
            pain: value,
            breathwork: value,
            food: value,
            rest: value,
            drugs: value,
            medical: value,
            life: value,
        }
    }

    /// The value stored for `category`.
    pub const fn get(&self, category: Category) -> T {
        match category {
            Category::Sexual => self.sexual,
            Category::Social => self.social,
            Category::Pain => self.pain,
            Category::Breathwork => self.breathwork,
            Category::Food => self.food,
            Category::Rest => self.rest,
            Category::Drugs => self.drugs,
            Category::Medical => self.medical,
            Category::Life => self.life,
        }
    }

    /// Mutable access to the value stored for `category`.
    pub const fn get_mut(&mut self, category: Category) -> &mut T {
        match category {
            Category::Sexual => &mut self.sexual,
            Category::Social => &mut self.social,
            Category::Pain => &mut self.pain,
            Category::Breathwork => &mut self.breathwork,
            Category::Food => &mut self.food,
            Category::Rest => &mut self.rest,
            Category::Drugs => &mut self.drugs,
            Category::Medical => &mut self.medical,
            Category::Life => &mut self.life,
        }
    }

    /// Iterate `(category, value)` pairs in [`Category::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, T)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Apply `f` to every value in place.
    pub fn update_all(&mut self, mut f: impl FnMut(Category, T) -> T) {
        for category in Category::ALL {
            let slot = self.get_mut(category);
            *slot = f(category, *slot);
        }
    }
}

/// One value per reserve-backed [`Neurotransmitter`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReserveMap<T> {
    /// Value for [`Neurotransmitter::Dopamine`].
    pub dopamine: T,
    /// Value for [`Neurotransmitter::Serotonin`].
    pub serotonin: T,
    /// Value for [`Neurotransmitter::Endorphins`].
    pub endorphins: T,
    /// Value for [`Neurotransmitter::Oxytocin`].
    pub oxytocin: T,
}

impl<T: Copy> ReserveMap<T> {
    /// A map holding `value` for every neurotransmitter.
    pub const fn splat(value: T) -> Self {
        Self {
            dopamine: value,
            serotonin: value,
            endorphins: value,
            oxytocin: value,
        }
    }

    /// The value stored for `nt`.
    pub const fn get(&self, nt: Neurotransmitter) -> T {
        match nt {
            Neurotransmitter::Dopamine => self.dopamine,
            Neurotransmitter::Serotonin => self.serotonin,
            Neurotransmitter::Endorphins => self.endorphins,
            Neurotransmitter::Oxytocin => self.oxytocin,
        }
    }

    /// Mutable access to the value stored for `nt`.
    pub const fn get_mut(&mut self, nt: Neurotransmitter) -> &mut T {
        match nt {
            Neurotransmitter::Dopamine => &mut self.dopamine,
            Neurotransmitter::Serotonin => &mut self.serotonin,
            Neurotransmitter::Endorphins => &mut self.endorphins,
            Neurotransmitter::Oxytocin => &mut self.oxytocin,
        }
    }

    /// Iterate `(neurotransmitter, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Neurotransmitter, T)> + '_ {
        Neurotransmitter::ALL.into_iter().map(|nt| (nt, self.get(nt)))
    }

    /// Apply `f` to every value in place.
    pub fn update_all(&mut self, mut f: impl FnMut(Neurotransmitter, T) -> T) {
        for nt in Neurotransmitter::ALL {
            let slot = self.get_mut(nt);
            *slot = f(nt, *slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_map_get_mut_targets_one_key() {
        let mut map = CategoryMap::splat(0.0_f64);
        *map.get_mut(Category::Drugs) += 0.5;
        for (category, value) in map.iter() {
            let expected = if category == Category::Drugs { 0.5 } else { 0.0 };
            assert!((value - expected).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn reserve_map_update_all_visits_every_key() {
        let mut map = ReserveMap::splat(10.0_f64);
        map.update_all(|_, v| v * 2.0);
        assert!(map.iter().all(|(_, v)| (v - 20.0).abs() < f64::EPSILON));
    }
}
