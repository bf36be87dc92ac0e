//! Static content pages

use crate::navigation::Route;

/// Title and text of a page without interactive content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPage {
    pub route: Route,
    pub title: &'static str,
    pub description: &'static str,
    /// Optional bullet list under a "Funcionalidades" heading
    pub features: &'static [&'static str],
}

const PAGES: &[StaticPage] = &[
    StaticPage {
        route: Route::Planejamentos,
        title: "Planejamentos",
        description: "Aqui você pode gerenciar seus planejamentos financeiros.",
        features: &[],
    },
    StaticPage {
        route: Route::AdicionarGastos,
        title: "Adicionar Gastos",
        description: "Registre seus gastos do dia a dia de forma rápida e fácil.",
        features: &[],
    },
    StaticPage {
        route: Route::GastosExtraordinarios,
        title: "Gastos Extraordinários",
        description: "Gerencie gastos esporádicos e imprevistos que saem do orçamento normal.",
        features: &[],
    },
    StaticPage {
        route: Route::Sobre,
        title: "Sobre",
        description: "Sistema de gestão financeira pessoal desenvolvido para ajudar você a controlar suas finanças.",
        features: &[
            "Planejamento financeiro",
            "Controle de gastos",
            "Gastos extraordinários",
            "Relatórios e gráficos",
        ],
    },
];

pub const FEATURES_HEADING: &str = "Funcionalidades";

/// Static page for `route`. The home route has interactive content instead
pub fn page_for(route: Route) -> Option<&'static StaticPage> {
    PAGES.iter().find(|page| page.route == route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_but_home_has_a_page() {
        assert!(page_for(Route::Home).is_none());
        for route in Route::all().iter().filter(|r| **r != Route::Home) {
            let page = page_for(*route).unwrap();
            assert_eq!(page.title, route.title());
        }
    }

    #[test]
    fn test_about_lists_features() {
        let about = page_for(Route::Sobre).unwrap();
        assert_eq!(about.features.len(), 4);
        assert!(page_for(Route::Planejamentos).unwrap().features.is_empty());
    }
}
