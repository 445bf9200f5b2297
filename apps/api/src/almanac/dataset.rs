//! The hand-curated almanac tables. Loaded with the binary, never mutated.
//!
//! Month-scoped rows key on the English month name. Row order is the order
//! in which the join returns them.

use super::models::{
    CropCalendarEntry, CropInfo, Indicator, IndicatorType, MarineSpeciesInfo, MarineStatusEntry,
    Month, SeasonalTitle, TreePhenologyEntry, TreeStatus,
};

use super::models::IndicatorType::{Crop, Freshwater, Maritime, NativePlants};
use super::models::TreeStatus::{Flowering, Fruiting};

pub static MONTHS: [Month; 12] = [
    Month::new(1, "January", "Janueri"),
    Month::new(2, "February", "Feperueri"),
    Month::new(3, "March", "Maji"),
    Month::new(4, "April", "Epereli"),
    Month::new(5, "May", "Me"),
    Month::new(6, "June", "Jiune"),
    Month::new(7, "July", "Julai"),
    Month::new(8, "August", "Okosita"),
    Month::new(9, "September", "Seviteba"),
    Month::new(10, "October", "Okotova"),
    Month::new(11, "November", "Noveba"),
    Month::new(12, "December", "Tiseba"),
];

const fn title(
    month_name_en: &'static str,
    title_en: &'static str,
    title_fj: &'static str,
) -> SeasonalTitle {
    SeasonalTitle {
        month_name_en,
        title_en,
        title_fj,
        category: "season",
    }
}

pub static SEASONAL_TITLES: &[SeasonalTitle] = &[
    title("January", "Month of Abundance of Rabbitfish", "Vula I Nuqa Levu"),
    title("February", "Month of Presentation of First Fruits", "Vula I Sevu"),
    title("March", "Month of Harvesting Yams", "Vula I Kelikeli"),
    title("April", "Month of Flowering of Reeds", "Vula I Gasau"),
    title("May", "Month of Flowering of the Doi", "Vula I Doi"),
    title("June", "Month of Weeding and Clearing", "Vula I Werewere"),
    title("July", "Month of Soil Preparation", "Vula I Cukicuki"),
    title("August", "Month of Flowering of Drala", "Vula I Senidrala"),
    title("September", "Month of Sprouting Yams", "Vula I Vavakada"),
    title("October", "Month of Small Supply of Balolo", "Vula I Balolo Lailai"),
    title("November", "Month of Abundant Supply of Balolo", "Vula I Balolo Levu"),
    title("December", "Month of Low Availability of Rabbitfish", "Vula I Nuqa Lailai"),
];

const fn crop(
    month_name_en: &'static str,
    crop_name_en: &'static str,
    recommendation: &'static str,
) -> CropCalendarEntry {
    CropCalendarEntry {
        month_name_en,
        crop_name_en,
        recommendation,
    }
}

pub static CROP_CALENDAR: &[CropCalendarEntry] = &[
    crop("January", "Taro", "Ideal time to plant"),
    crop("January", "Sweet potato", "Planted during these months"),
    crop("February", "Breadfruit", "Harvest"),
    crop("March", "Yam", "Harvest and planting"),
    crop("April", "Breadfruit", "Abundant"),
    crop("May", "Cucumber", "Direct planting from seed"),
    crop("May", "Watermelon", "Direct planting from seed"),
    crop("May", "Eggplant", "Transplanting"),
    crop("June", "Yam", "Begin planting"),
    crop("July", "Taro", "Ideal time to plant"),
    crop("August", "Cassava", "Ideal crop for season"),
    crop("September", "Taro", "Planting season"),
    crop("October", "Breadfruit", "Harvest"),
    crop("November", "Leafy vegetables", "Planting season"),
    crop("December", "Breadfruit", "Maturity"),
];

const fn ind(
    month_name_en: &'static str,
    indicator_type: IndicatorType,
    note_en: &'static str,
    note_fj: &'static str,
) -> Indicator {
    Indicator {
        month_name_en,
        indicator_type,
        note_en,
        note_fj,
    }
}

#[rustfmt::skip]
pub static INDICATORS: &[Indicator] = &[
    ind("January", Maritime, "Great abundance of Parrotfish; crabs, Giant Trevally and Spanish Mackerel spawning", "Levu na Nuqa; Vakaluveni na Saqa, Walu"),
    ind("January", Freshwater, "Habihabi, Ohi, Mo’Omo’O, Motomoto listed as freshwater shellfish", "Se Tiko Na Nuqanuqa/Nukanuka Ka Vakatakilakila Ni Sa Cabe Na Nuqa"),
    ind("January", Crop, "Ideal time to plant Dalo ni Tana, Dalo ni Vuci, Vudi, Jaina, Tivoli", "Gauna Vinaka Ni Tei – Dalo Ni Tana, Dalo Ni Vuci, Vudi, Jaina, Tivoli"),
    ind("January", NativePlants, "Lagakali and Buaniviti flowering (used for perfumed oil and garlands)", "Se Na Lagakali, Buaniviti, Caucau, Makosoi/Mahosoi"),

    ind("February", Maritime, "Sea slugs and univalves abundant", "Levu na Vivili Kei na Sasalu Ni Waitui"),
    ind("February", Freshwater, "Small fish Malevu and Voro abundant", "Iha/Ika Ni Waidranu/Waidroka – Sesere, Malea, Lova"),
    ind("February", Crop, "Breadfruit, taro, cassava harvest", "Matua Tiko na Dalo Ni Tana Kei na Tivoli"),
    ind("February", NativePlants, "Dakua Salusalu flowering", "Se na Dakua/Tahua Salusalu"),

    ind("March", Maritime, "Sea slugs and univalves abundant", "Levu na Vivili Kei na Sasalu Ni Waitui"),
    ind("March", Freshwater, "Water levels changing (Duana/Tuna)", "Tawa Tiko Na Wai Ena Duana/Tuna"),
    ind("March", Crop, "Yam harvest and planting", "Tei Na Uvi Taumada"),
    ind("March", NativePlants, "Yaka tree flowering", "Se na Yaka"),

    ind("April", Maritime, "Goldspot Herring, Sardinella, Barracuda, Trevally netted", "Levu na Tugadra, Daniva, Salala, Sara"),
    ind("April", Freshwater, "Shellfish Drevula abundant", "Levu na Drevula Kei na Veimataqali Vivili"),
    ind("April", Crop, "Start planting leafy vegetables", "Tekivu Na Bucibucini – Kakana Draudrau"),
    ind("April", NativePlants, "Duruka and Vico flowering", "Se na Duruka Kei na Vico"),

    ind("May", Maritime, "Goldspot Herring, Sardinella, Bigeyed scad netted", "Tukuni Ni Dau Drava na Watui"),
    ind("May", Freshwater, "Fishing poor", "Cabe na Salala Ka Levu Tiko na Tugadra"),
    ind("May", Crop, "Direct planting (cucumber, watermelon, beans, okra, corn, garlic)", "Direct planting from seeds"),
    ind("May", NativePlants, "Doi tree flowering", "Se na Doi"),

    ind("June", Maritime, "Spanish Mackerel, Barracuda, Trevally abundant", "Levu na Matu, Salala, Tugadra, Daniva"),
    ind("June", Freshwater, "Sea grapes (nama) and Lumi harvested", "Levu na nama Kei na Lumi"),
    ind("June", Crop, "Begin weeding and planting first yams", "Tekivu na Werewere"),
    ind("June", NativePlants, "Dilo and Dakua Salusalu fruiting", "Vua na Dilo Kei na Dakua/Tahua Salusalu"),

    ind("July", Maritime, "Octopus abundant", "Basika na Kuita"),
    ind("July", Freshwater, "Goatfish, herring, scad abundant", "Levu na Ose Kei na Daniva"),
    ind("July", Crop, "Soil preparation and taro planting", "Cukicuki Ka Tei na Uvi"),
    ind("July", NativePlants, "Mango, Oranges, Kavika flowering", "Se na Maqo, Kavika, Moli"),

    ind("August", Maritime, "Octopus high season", "Levu na Kuita"),
    ind("August", Freshwater, "Little fish Vaya and Matu abundant", "Levu na Vaya, Matu"),
    ind("August", Crop, "Cassava, taro, ginger, yams, plantain, bananas ideal", "IDEAL CROPS that grow well"),
    ind("August", NativePlants, "Drala flowering", "Se na Drala"),

    ind("September", Maritime, "Kawakawa still breeding", "Vakaluveni Tiko na Kawakawa Kei na Donu"),
    ind("September", Freshwater, "Golden Plover migration", "Kumukumuni na Dilio"),
    ind("September", Crop, "Taro and Kawai yam planting", "Dau Caka na Veitiqa Ni Sa Tei Oti"),
    ind("September", NativePlants, "Mango and Drala flowering", "Se na Maqo, Drala"),

    ind("October", Maritime, "First appearance of Balolo", "Ta na Balolo Ena So na Vanua"),
    ind("October", Freshwater, "Some fish poisonous", "Dau Gaga Eso na Ika"),
    ind("October", Crop, "Kawai yam cultivation", "Tei na Kawai"),
    ind("October", NativePlants, "Mokosoi and Misimisi flowering", "Se na Mokosoi, Misimisi"),

    ind("November", Maritime, "Second larger appearance of Balolo", "Ta na Balolo Ena So na Vanua"),
    ind("November", Freshwater, "Some fish poisonous", "Dau Gaga Eso na Ika"),
    ind("November", Crop, "Leafy vegetables planting (rourou, bele, watercress)", "Opportune time to plant leafy vegetables"),
    ind("November", NativePlants, "Mango, Pineapple, Kavika, Dawa fruiting", "Vua na Maqo, Painapiu, Kavika, Dawa"),

    ind("December", Maritime, "Rabbitfish low supply", "Levu na Nuqa Lailai"),
    ind("December", Freshwater, "Young sharks born", "Veibaleti na Vonu"),
    ind("December", Crop, "Breadfruit maturity", "Se na Sinukakala"),
    ind("December", NativePlants, "Flamboyant trees flowering", "Se na Nuqanuqa, Buabua, Sekoula"),
];

const fn marine(
    month_name_en: &'static str,
    species_name_en: &'static str,
    status: &'static str,
    note: &'static str,
) -> MarineStatusEntry {
    MarineStatusEntry {
        month_name_en,
        species_name_en,
        status,
        note,
    }
}

/// The March and September "Yam" rows are crops recorded as marine status
/// in the source survey. They are kept until the curators confirm intent.
pub static MARINE_STATUS: &[MarineStatusEntry] = &[
    marine("January", "Rabbitfish", "abundance", "High volume"),
    marine("January", "Parrotfish", "abundance", "Great abundance"),
    marine("January", "Giant trevally", "spawning", ""),
    marine("January", "Spanish mackerel", "spawning", ""),
    marine("February", "Emperor", "abundance", ""),
    marine("February", "Goatfish", "abundance", ""),
    marine("March", "Yam", "harvest", ""),
    marine("April", "Spanish mackerel", "abundance", ""),
    marine("June", "Octopus", "season begins", ""),
    marine("July", "Octopus", "abundant", ""),
    marine("August", "Kawakawa", "spawning", ""),
    marine("September", "Yam", "sprouting", ""),
    marine("October", "Balolo", "appearance", "First appearance"),
    marine("November", "Balolo", "abundance", "Second larger appearance"),
    marine("December", "Rabbitfish", "low_supply", ""),
];

const fn tree(
    month_name_en: &'static str,
    tree_name_en: &'static str,
    status: TreeStatus,
    note: &'static str,
) -> TreePhenologyEntry {
    TreePhenologyEntry {
        month_name_en,
        tree_name_en,
        status,
        note,
    }
}

pub static TREE_PHENOLOGY: &[TreePhenologyEntry] = &[
    tree("January", "Damanu/Tamanu", Flowering, ""),
    tree("January", "Lagakali", Flowering, "Used for perfumed oil"),
    tree("January", "Buaniviti", Flowering, "Used for garlands"),
    tree("March", "Yaka", Flowering, "Handicrafts and herbal medicine"),
    tree("May", "Doi", Flowering, ""),
    tree("May", "Vesi", Fruiting, ""),
    tree("June", "Dilo", Fruiting, ""),
    tree("July", "Pandanus", Flowering, ""),
    tree("August", "Drala", Flowering, ""),
    tree("October", "Mokosoi", Flowering, "Perfumed oils"),
    tree("November", "Misimisi", Fruiting, ""),
    tree("December", "Flamboyant", Flowering, ""),
    tree("December", "Cawa", Fruiting, ""),
    tree("December", "Vutu", Fruiting, ""),
    tree("December", "Tiri", Fruiting, ""),
    tree("December", "Duruka", Fruiting, ""),
    tree("December", "Vico", Fruiting, ""),
];

const fn crop_info(
    name_en: &'static str,
    name_fj: &'static str,
    latin_name: Option<&'static str>,
    crop_type: &'static str,
) -> CropInfo {
    CropInfo {
        name_en,
        name_fj,
        latin_name,
        crop_type,
    }
}

pub static CROP_DB: &[CropInfo] = &[
    crop_info("Taro", "Dalo", None, "starchy"),
    crop_info("Yam", "Uvi", None, "starchy"),
    crop_info("Plantain", "Vudi", None, "starchy"),
    crop_info("Banana", "Jaina", None, "fruit"),
    crop_info("Corn", "Sila", None, "grain"),
    crop_info("Sweet potato", "Kumala", None, "starchy"),
    crop_info("Cabbage", "Kaveti", None, "leafy"),
    crop_info("Lettuce", "Letisi", None, "leafy"),
    crop_info("Cucumber", "Kiukaba", None, "fruit"),
    crop_info("Watermelon", "Meleni", None, "fruit"),
    crop_info("Eggplant", "Baigani", None, "fruit"),
    crop_info("Chilli", "Rokete", None, "fruit"),
    crop_info("Breadfruit", "Uto", None, "fruit"),
    crop_info("Arrowroot", "Yabia", None, "root"),
    crop_info("Duruka", "Duruka", Some("Saccharum edule"), "leafy"),
    crop_info("Vico", "Vico", Some("Erianthus maximus"), "leafy"),
];

const fn species(
    name_en: &'static str,
    name_fj: &'static str,
    taxonomic_name: Option<&'static str>,
    species_class: &'static str,
) -> MarineSpeciesInfo {
    MarineSpeciesInfo {
        name_en,
        name_fj,
        taxonomic_name,
        species_class,
    }
}

pub static MARINE_SPECIES_DB: &[MarineSpeciesInfo] = &[
    species("Rabbitfish", "Nuqa", Some("Siganus argenteus"), "fish"),
    species("Parrotfish", "Ulavi", Some("Scarus spp./Chlorurus spp."), "fish"),
    species("Giant trevally", "Saqa", Some("Caranx ignobilis"), "fish"),
    species("Spanish mackerel", "Walu", Some("Scomberomorus commerson"), "fish"),
    species("Goatfish", "Lova", Some("Parupeneus spp."), "fish"),
    species("Emperor", "Sesere", Some("Lethrinus spp."), "fish"),
    species("Tilapia/Grass carp", "Malea", None, "fish"),
    species("Octopus", "Kuita", None, "cephalopod"),
    species("Kawakawa (Grouper)", "Kawakawa", Some("Cephalopholis spp."), "fish"),
    species("Skipjack tuna", "La Seu", Some("Katsuwonus pelamis"), "fish"),
    species("Yellowfin tuna", "Tuna", Some("Thunnus albacares"), "fish"),
    species("Great barracuda", "Ogo", Some("Sphyraena barracuda"), "fish"),
    species("Silver scad", "Tugadra", Some("Selar crumenophthalmus"), "fish"),
    species("Balolo", "Balolo", Some("Eunice viridis"), "worm"),
];
