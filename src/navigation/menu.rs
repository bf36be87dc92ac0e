//! Navigation menu entries

use serde::Serialize;

use super::routes::Route;

/// One entry of the navigation drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Material icon name
    pub icon: &'static str,
    pub label: &'static str,
    pub route: Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl MenuItem {
    /// Short glyph for terminals without icon fonts
    pub fn glyph(&self) -> &'static str {
        match self.icon {
            "home" => "⌂",
            "account_balance_wallet" => "$",
            "add_circle" => "+",
            "warning" => "!",
            "info" => "i",
            _ => "•",
        }
    }
}

pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        icon: "home",
        label: "Início",
        route: Route::Home,
        description: Some("Página inicial do sistema"),
    },
    MenuItem {
        icon: "account_balance_wallet",
        label: "Planejamentos",
        route: Route::Planejamentos,
        description: Some("Gerencie seus planejamentos financeiros"),
    },
    MenuItem {
        icon: "add_circle",
        label: "Adicionar gastos",
        route: Route::AdicionarGastos,
        description: Some("Registre novos gastos"),
    },
    MenuItem {
        icon: "warning",
        label: "Gastos extraordinários",
        route: Route::GastosExtraordinarios,
        description: Some("Gastos imprevistos e esporádicos"),
    },
    MenuItem {
        icon: "info",
        label: "Sobre",
        route: Route::Sobre,
        description: Some("Informações sobre o sistema"),
    },
];

/// Position of the entry for `route`
pub fn index_of(route: Route) -> Option<usize> {
    MENU_ITEMS.iter().position(|item| item.route == route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_has_one_entry() {
        for route in Route::all() {
            assert_eq!(
                MENU_ITEMS.iter().filter(|item| item.route == *route).count(),
                1
            );
        }
        assert_eq!(index_of(Route::Sobre), Some(4));
    }

    #[test]
    fn test_menu_json() {
        let json = serde_json::to_value(MENU_ITEMS[0]).unwrap();
        assert_eq!(json["route"], "/home");
        assert_eq!(json["label"], "Início");
        assert_eq!(json["icon"], "home");
    }
}
