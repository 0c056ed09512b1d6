use serde::Serialize;
use serde::de::DeserializeOwned;

pub trait KeyValueStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let Some(storage) = local_storage() else {
            anyhow::bail!("no local storage available");
        };

        let Ok(value) = storage.get_item(key) else {
            anyhow::bail!("failed to read {key}");
        };

        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let Some(storage) = local_storage() else {
            anyhow::bail!("no local storage available");
        };

        let Ok(_) = storage.set_item(key, value) else {
            anyhow::bail!("failed to save {key}");
        };

        Ok(())
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    if let Some(window) = web_sys::window() {
        if let Ok(storage) = window.local_storage() {
            return storage;
        }
    }
    None
}

pub fn read<T, S>(storage: &S, key: &str) -> anyhow::Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStorage,
{
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };

    Ok(Some(serde_json::from_str(&raw)?))
}

pub fn write<T, S>(storage: &S, key: &str, value: &T) -> anyhow::Result<()>
where
    T: Serialize,
    S: KeyValueStorage,
{
    storage.set(key, &serde_json::to_string(value)?)
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
