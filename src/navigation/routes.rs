//! Route table

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{CarteiraError, CarteiraResult};

/// Every screen the shell can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Planejamentos,
    AdicionarGastos,
    GastosExtraordinarios,
    Sobre,
}

impl Route {
    pub fn all() -> &'static [Route] {
        &[
            Route::Home,
            Route::Planejamentos,
            Route::AdicionarGastos,
            Route::GastosExtraordinarios,
            Route::Sobre,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/home",
            Self::Planejamentos => "/planejamentos",
            Self::AdicionarGastos => "/adicionar-gastos",
            Self::GastosExtraordinarios => "/gastos-extraordinarios",
            Self::Sobre => "/sobre",
        }
    }

    /// Heading shown at the top of the screen
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Início",
            Self::Planejamentos => "Planejamentos",
            Self::AdicionarGastos => "Adicionar Gastos",
            Self::GastosExtraordinarios => "Gastos Extraordinários",
            Self::Sobre => "Sobre",
        }
    }

    /// Resolve a path. The empty path redirects to `/home`
    pub fn resolve(path: &str) -> CarteiraResult<Route> {
        let trimmed = path.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Route::Home);
        }
        Route::all()
            .iter()
            .copied()
            .find(|route| route.path().trim_start_matches('/') == trimmed)
            .ok_or_else(|| CarteiraError::route_not_found(path))
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = CarteiraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::resolve(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_redirects_home() {
        assert_eq!(Route::resolve("").unwrap(), Route::Home);
        assert_eq!(Route::resolve("/").unwrap(), Route::Home);
    }

    #[test]
    fn test_resolve_known_paths() {
        for route in Route::all() {
            assert_eq!(Route::resolve(route.path()).unwrap(), *route);
        }
        assert_eq!(Route::resolve("sobre").unwrap(), Route::Sobre);
        assert_eq!(
            "/adicionar-gastos/".parse::<Route>().unwrap(),
            Route::AdicionarGastos
        );
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let err = Route::resolve("/relatorios").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Route not found: /relatorios");
    }

    #[test]
    fn test_serializes_as_path() {
        assert_eq!(
            serde_json::to_string(&Route::GastosExtraordinarios).unwrap(),
            r#""/gastos-extraordinarios""#
        );
    }
}
