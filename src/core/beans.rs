//! Registro dei componenti creati dal composition root
//!
//! Non fa dependency injection: `AppState::new` costruisce tutto a mano e
//! annota qui cosa ha costruito, in modo da poterlo mostrare (log all'avvio e
//! `GET /beans`).

use serde::Serialize;
use std::any::type_name;
use tracing::info;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BeanInfo {
    pub name: &'static str,
    pub type_name: &'static str,
}

#[derive(Debug, Default, Clone)]
pub struct BeanRegistry {
    beans: Vec<BeanInfo>,
}

impl BeanRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un componente di tipo `T` con il nome dato
    pub fn register<T: ?Sized>(&mut self, name: &'static str) -> &mut Self {
        self.beans.push(BeanInfo {
            name,
            type_name: type_name::<T>(),
        });
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.beans.iter().map(|b| b.name).collect()
    }

    pub fn beans(&self) -> &[BeanInfo] {
        &self.beans
    }

    pub fn len(&self) -> usize {
        self.beans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beans.is_empty()
    }

    pub fn log_all(&self) {
        info!("{} components wired", self.beans.len());
        for bean in &self.beans {
            info!("  {} -> {}", bean.name, bean.type_name);
        }
    }
}
