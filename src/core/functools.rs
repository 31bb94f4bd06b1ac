use crate::utils::error::{Result, SpellError};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::rc::Rc;
use std::str::FromStr;

/// Binary operations `spell_reducer` knows how to fold with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    Add,
    Multiply,
    Max,
    Min,
}

impl ReduceOp {
    fn apply(self, acc: i64, value: i64) -> Result<i64> {
        let overflow = || SpellError::PowerOverflow {
            what: format!("{:?}", self).to_lowercase(),
        };
        match self {
            ReduceOp::Add => acc.checked_add(value).ok_or_else(overflow),
            ReduceOp::Multiply => acc.checked_mul(value).ok_or_else(overflow),
            ReduceOp::Max => Ok(acc.max(value)),
            ReduceOp::Min => Ok(acc.min(value)),
        }
    }
}

impl FromStr for ReduceOp {
    type Err = SpellError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(ReduceOp::Add),
            "multiply" => Ok(ReduceOp::Multiply),
            "max" => Ok(ReduceOp::Max),
            "min" => Ok(ReduceOp::Min),
            other => Err(SpellError::InvalidOperation {
                operation: other.to_string(),
            }),
        }
    }
}

/// Left fold of `spells` with the named operation.
pub fn spell_reducer(spells: &[i64], operation: &str) -> Result<i64> {
    let op: ReduceOp = operation.parse()?;
    let (first, rest) = spells.split_first().ok_or_else(|| SpellError::EmptyInput {
        what: "spells".to_string(),
    })?;
    rest.iter().try_fold(*first, |acc, &value| op.apply(acc, value))
}

pub const ENCHANTMENT_POWER: u32 = 50;

pub type Enchanter<'a> = Box<dyn Fn(&str) -> String + 'a>;

/// 以 partial application 把力量與元素綁進 `base_enchantment(power, element, item)`
pub fn partial_enchanter<'a, F>(base_enchantment: F) -> BTreeMap<&'static str, Enchanter<'a>>
where
    F: Fn(u32, &str, &str) -> String + 'a,
{
    let base = Rc::new(base_enchantment);
    let mut enchanters: BTreeMap<&'static str, Enchanter<'a>> = BTreeMap::new();

    for (key, element) in [
        ("fire_enchant", "fire"),
        ("ice_enchant", "ice"),
        ("lightning_enchant", "lightning"),
    ] {
        let base = Rc::clone(&base);
        enchanters.insert(
            key,
            Box::new(move |item: &str| (*base)(ENCHANTMENT_POWER, element, item)),
        );
    }

    enchanters
}

/// Largest index whose Fibonacci number fits in a u128.
pub const MAX_FIBONACCI_INDEX: u32 = 186;

/// 由下而上填滿備忘表，堆疊深度與 `n` 無關。
///
/// `Memoized` wraps a function that cannot call back into its own cache, so the
/// recursive definition keeps its own table here.
pub fn memoized_fibonacci(n: u32) -> Result<u128> {
    if n > MAX_FIBONACCI_INDEX {
        return Err(SpellError::PowerOverflow {
            what: format!("fibonacci({})", n),
        });
    }

    let mut memo: Vec<u128> = vec![0, 1];
    for k in 2..=n as usize {
        let value = memo[k - 1]
            .checked_add(memo[k - 2])
            .ok_or_else(|| SpellError::PowerOverflow {
                what: format!("fibonacci({})", k),
            })?;
        memo.push(value);
    }

    Ok(memo[n as usize])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheInfo {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

/// Unbounded memoization of a single-argument function.
pub struct Memoized<A, R, F> {
    func: F,
    cache: RefCell<HashMap<A, R>>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: Fn(&A) -> R,
{
    pub fn new(func: F) -> Self {
        Self {
            func,
            cache: RefCell::new(HashMap::new()),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    pub fn call(&self, arg: A) -> R {
        if let Some(cached) = self.cache.borrow().get(&arg) {
            self.hits.set(self.hits.get() + 1);
            tracing::debug!("cache hit");
            return cached.clone();
        }

        self.misses.set(self.misses.get() + 1);
        let result = (self.func)(&arg);
        self.cache.borrow_mut().insert(arg, result.clone());
        result
    }

    pub fn cache_info(&self) -> CacheInfo {
        CacheInfo {
            hits: self.hits.get(),
            misses: self.misses.get(),
            size: self.cache.borrow().len(),
        }
    }

    pub fn cache_clear(&self) {
        self.cache.borrow_mut().clear();
        self.hits.set(0);
        self.misses.set(0);
    }
}

pub const UNKNOWN_SPELL: &str = "Unknown spell";

pub type SpellDispatcher = Memoized<String, Option<&'static str>, fn(&String) -> Option<&'static str>>;

#[allow(clippy::ptr_arg)]
fn lookup_spell(spell_name: &String) -> Option<&'static str> {
    match spell_name.as_str() {
        "fireball" => Some("Casting Fireball!"),
        "heal" => Some("Casting Heal!"),
        "lightning" => Some("Casting Lightning!"),
        _ => None,
    }
}

pub fn spell_dispatcher() -> SpellDispatcher {
    Memoized::new(lookup_spell as fn(&String) -> Option<&'static str>)
}
