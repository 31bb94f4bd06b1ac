use crate::utils::error::{Result, SpellError};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

pub fn mage_counter() -> impl FnMut() -> u32 {
    let mut count = 0;
    move || {
        count += 1;
        count
    }
}

pub fn spell_accumulator(initial_power: u32) -> impl FnMut() -> u32 {
    let mut total_power: u32 = 0;
    move || {
        total_power = total_power.saturating_add(initial_power);
        total_power
    }
}

pub fn enchantment_factory(enchantment_type: &str) -> impl Fn(&str) -> String {
    let enchantment_type = enchantment_type.to_string();
    move |item_name: &str| format!("{} {}", enchantment_type, item_name)
}

type StoreFn<V> = Box<dyn Fn(&str, V) -> BTreeMap<String, V>>;
type RecallFn<V> = Box<dyn Fn(&str) -> Result<V>>;

/// `store` 與 `recall` 兩個閉包共享同一份私有記憶
pub struct MemoryVault<V> {
    store: StoreFn<V>,
    recall: RecallFn<V>,
}

impl<V> MemoryVault<V> {
    /// Inserts or overwrites `key` and returns a snapshot of everything remembered.
    pub fn store(&self, key: &str, value: V) -> BTreeMap<String, V> {
        (self.store)(key, value)
    }

    pub fn recall(&self, key: &str) -> Result<V> {
        (self.recall)(key)
    }
}

pub fn memory_vault<V: Clone + 'static>() -> MemoryVault<V> {
    let memory: Rc<RefCell<BTreeMap<String, V>>> = Rc::new(RefCell::new(BTreeMap::new()));

    let store_memory = Rc::clone(&memory);
    let store = move |key: &str, value: V| {
        let mut memory = store_memory.borrow_mut();
        memory.insert(key.to_string(), value);
        memory.clone()
    };

    let recall = move |key: &str| {
        memory
            .borrow()
            .get(key)
            .cloned()
            .ok_or_else(|| SpellError::MemoryNotFound {
                key: key.to_string(),
            })
    };

    MemoryVault {
        store: Box::new(store),
        recall: Box::new(recall),
    }
}
