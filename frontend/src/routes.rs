use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use common::list_query::{EggListQuery, PetListQuery};

use crate::data_definitions::query_segments::{EggQuery, PetQuery};
use crate::pages::eggs_page::EggsPage;
use crate::pages::home_page::HomePage;
use crate::pages::pets_page::PetsPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/wiki/pets?:..query")]
    PetsPage { query: PetQuery },


    #[route("/wiki/eggs?:..query")]
    EggsPage { query: EggQuery },

}

impl Route {
    pub fn pets_page_from_query(q: PetListQuery) -> Self {
        Self::PetsPage {
            query: PetQuery::from(q),
        }
    }

    pub fn eggs_page_from_query(q: EggListQuery) -> Self {
        Self::EggsPage {
            query: EggQuery::from(q),
        }
    }
}
