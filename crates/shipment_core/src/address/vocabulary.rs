//! Word lists used to recognise the parts of a US-style street address.
//!
//! All entries are lowercase; callers normalise tokens before lookup.

/// Road-type suffixes, both spelled out and in their common USPS abbreviations.
pub(super) const ROAD_SUFFIXES: &[&str] = &[
    "allee", "alley", "ally", "aly", "anex", "annex", "anx", "arc", "arcade", "av", "ave",
    "avenue", "avn", "bayou", "bch", "beach", "bend", "blf", "bluff", "bluffs", "blvd", "bnd",
    "bottom", "boulevard", "br", "branch", "brg", "bridge", "brk", "brook", "brooks", "btm",
    "burg", "burgs", "byp", "bypass", "byu", "camp", "canyon", "cape", "causeway", "center",
    "centers", "cir", "circle", "circles", "cirs", "ck", "clb", "clf", "clfs", "cliff",
    "cliffs", "club", "cmn", "common", "commons", "cor", "corner", "corners", "cors", "course",
    "court", "courts", "cove", "coves", "cp", "cpe", "creek", "cres", "crescent", "crest",
    "crk", "crossing", "crossroad", "crossroads", "crse", "crst", "cswy", "ct", "ctr", "ctrs",
    "cts", "curv", "curve", "cv", "cvs", "cyn", "dale", "dam", "divide", "dl", "dm", "dr",
    "drive", "drives", "drs", "dv", "est", "estate", "estates", "ests", "expressway", "expy",
    "ext", "extension", "extensions", "exts", "fall", "falls", "ferry", "field", "fields",
    "flat", "flats", "fld", "flds", "fls", "flt", "flts", "ford", "fords", "forest", "forge",
    "forges", "fork", "forks", "fort", "frd", "frds", "freeway", "frg", "frk", "frks", "frst",
    "frt", "fry", "ft", "fwy", "garden", "gardens", "gateway", "gdn", "gdns", "glen", "glens",
    "gln", "glns", "green", "greens", "grn", "grns", "grov", "grove", "groves", "grv", "grvs",
    "gtwy", "harbor", "harbors", "haven", "hbr", "hbrs", "heights", "highway", "hill", "hills",
    "hl", "hls", "hollow", "holw", "hts", "hvn", "hwy", "inlet", "is", "island", "islands",
    "isle", "iss", "jct", "jcts", "junction", "junctions", "key", "keys", "knl", "knls",
    "knoll", "knolls", "ky", "kys", "lake", "lakes", "land", "landing", "lane", "lck", "lcks",
    "ldg", "lf", "lgt", "lgts", "light", "lights", "lk", "lks", "ln", "lndg", "loaf", "lock",
    "locks", "lodge", "loop", "mall", "manor", "manors", "mdw", "mdws", "meadow", "meadows",
    "mews", "mill", "mills", "mission", "mnr", "mnrs", "motorway", "mount", "mountain",
    "mountains", "msn", "mt", "mtn", "mtns", "mtwy", "nck", "neck", "opas", "orch", "orchard",
    "oval", "overpass", "park", "parks", "parkway", "parkways", "pass", "passage", "path",
    "pike", "pine", "pines", "pkwy", "pkwys", "pl", "place", "plain", "plains", "plaza", "pln",
    "plns", "plz", "pne", "pnes", "point", "points", "port", "ports", "pr", "prairie", "prt",
    "prts", "psge", "pt", "pts", "rad", "radial", "ramp", "ranch", "rapid", "rapids", "rd",
    "rdg", "rdgs", "rds", "rest", "ridge", "ridges", "riv", "river", "rnch", "road", "roads",
    "route", "row", "rpd", "rpds", "rst", "rte", "rue", "run", "shl", "shls", "shoal",
    "shoals", "shore", "shores", "shr", "shrs", "skwy", "skyway", "smt", "spg", "spgs",
    "spring", "springs", "sq", "sqs", "square", "squares", "st", "sta", "station", "stra",
    "stravenue", "stream", "street", "streets", "strm", "sts", "summit", "ter", "terrace",
    "throughway", "tpke", "trace", "track", "trafficway", "trail", "trailer", "trak", "trce",
    "trfy", "trl", "trlr", "trwy", "tunl", "tunnel", "turnpike", "un", "underpass", "union",
    "unions", "uns", "upas", "valley", "valleys", "via", "viaduct", "view", "views", "vill",
    "village", "villages", "ville", "vis", "vista", "vl", "vlg", "vlgs", "vly", "vlys", "vw",
    "vws", "walk", "walks", "wall", "way", "ways", "well", "wells", "wl", "wls", "xing",
    "xrd", "xrds",
];

/// Secondary unit designators (apartment, suite, ...).
pub(super) const UNIT_DESIGNATORS: &[&str] = &[
    "apartment", "apt", "basement", "bldg", "bsmt", "building", "department", "dept", "fl",
    "floor", "frnt", "front", "hangar", "hngr", "lbby", "lobby", "lot", "lower", "lowr",
    "ofc", "office", "penthouse", "ph", "pier", "rear", "rm", "room", "side", "slip", "space",
    "spc", "ste", "stop", "suite", "trlr", "unit", "upper", "uppr",
];

/// Directional qualifiers that may precede or follow a street name.
pub(super) const DIRECTIONALS: &[&str] = &[
    "e", "east", "n", "ne", "north", "northeast", "northwest", "nw", "s", "se", "south",
    "southeast", "southwest", "sw", "w", "west",
];

pub(super) fn is_road_suffix(word: &str) -> bool {
    ROAD_SUFFIXES.binary_search(&word).is_ok()
}

pub(super) fn is_unit_designator(word: &str) -> bool {
    UNIT_DESIGNATORS.binary_search(&word).is_ok()
}

pub(super) fn is_directional(word: &str) -> bool {
    DIRECTIONALS.binary_search(&word).is_ok()
}
