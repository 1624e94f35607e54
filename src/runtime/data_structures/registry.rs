use std::collections::HashMap;

use crate::lang::tokenizing::{ is_native_symbol, is_valid_user_symbol };
use crate::runtime::data_structures::value::Value;
use crate::runtime::error::{ self, HexError };

/// Maximum number of user-defined symbols the registry will hold at once, mirroring the source's
/// `HEX_MAX_USER_SYMBOLS` (registry size minus the reserved native section).
pub const MAX_USER_SYMBOLS: usize = 960;

/// Keyed store from symbol names to values.  Only user symbols are ever stored here -- natives are
/// a fixed, name-derived set (see `is_native_symbol`) that never needs an entry of its own.
/// `std::HashMap` already gives us load-factor-triggered rehashing internally; this wraps it with
/// the registry's ownership and validation contract.
pub struct Registry
{
    entries: HashMap<String, Value>,
    user_count: usize,
}

impl Default for Registry
{
    fn default() -> Registry
    {
        Registry::new()
    }
}

impl Registry
{
    pub fn new() -> Registry
    {
        Registry { entries: HashMap::with_capacity(128), user_count: 0 }
    }

    pub fn contains_native(&self, key: &str) -> bool
    {
        is_native_symbol(key)
    }

    /// Bind a user symbol.  Rejects names that clash with natives or that are not syntactically
    /// valid user symbols.  Overwriting an existing user entry replaces (and so drops/frees) the
    /// previous value.
    pub fn set(&mut self, key: &str, value: Value) -> error::Result<()>
    {
        if !is_valid_user_symbol(key)
        {
            return Err(HexError::dispatch(format!("Invalid symbol: {}", key)));
        }

        if is_native_symbol(key)
        {
            return Err(HexError::dispatch(format!("[set symbol] Cannot overwrite native symbol '{}'", key)));
        }

        if !self.entries.contains_key(key) && self.user_count >= MAX_USER_SYMBOLS
        {
            return Err(HexError::resource("[set symbol] Too many user symbols defined"));
        }

        let replaced = self.entries.insert(key.to_string(), value);

        if replaced.is_none()
        {
            self.user_count += 1;
        }

        Ok(())
    }

    /// Look up a symbol, returning a deep copy so the caller may freely mutate or drop it without
    /// affecting the stored value.
    pub fn get(&self, key: &str) -> Option<Value>
    {
        self.entries.get(key).cloned()
    }

    /// Delete a user symbol.  Fails if the key is a native or is not present.
    pub fn delete(&mut self, key: &str) -> error::Result<()>
    {
        if is_native_symbol(key)
        {
            return Err(HexError::dispatch(format!("[symbol #] Cannot free native symbol '{}'", key)));
        }

        match self.entries.remove(key)
        {
            Some(_) =>
                {
                    self.user_count -= 1;
                    Ok(())
                }

            None => Err(HexError::dispatch(format!("[symbol #] Undefined symbol: {}", key))),
        }
    }

    /// All currently bound keys, natives and user symbols alike.
    pub fn list(&self) -> Vec<String>
    {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }
}
