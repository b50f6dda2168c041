// swissBOUNDARIES3D national territory, LV95
pub const SHAPEFILE_PATH: &str = "data/swissBOUNDARIES3D_1_5_TLM_LANDESGEBIET.shp";

pub const DEFAULT_BATCH_SIZE: usize = 1000;

pub const DEFAULT_MAP_BASE_URL: &str =
    "https://map.geo.admin.ch/?lang=en&topic=ech&bgLayer=ch.swisstopo.pixelkarte-farbe";
pub const DEFAULT_MAP_ZOOM: u8 = 10;
