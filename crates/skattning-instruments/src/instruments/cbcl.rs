//! CBCL: Child Behavior Checklist (caregiver report), 113 numbered items
//! rated 0–2, question 56 expanded into sub-items a–h. Same scoring rule
//! as the YSR over its own cluster tables.

use std::sync::LazyLock;

use crate::Instrument;
use crate::scoring::{ChecklistCluster, ClusterSet, Item};

use super::checklist_items;

fn cluster(id: &str, name: &str, members: &[&str]) -> ChecklistCluster {
    ChecklistCluster {
        id: id.to_string(),
        name: name.to_string(),
        members: members.iter().map(|m| m.to_string()).collect(),
        highlight: false,
    }
}

fn highlighted(id: &str, name: &str, members: &[&str]) -> ChecklistCluster {
    ChecklistCluster {
        highlight: true,
        ..cluster(id, name, members)
    }
}

pub struct Cbcl;

impl Instrument for Cbcl {
    fn id(&self) -> &str {
        "cbcl"
    }

    fn name(&self) -> &str {
        "CBCL"
    }

    fn rating_max(&self) -> u8 {
        2
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| checklist_items(113));
        &ITEMS
    }

    fn cluster_sets(&self) -> &[ClusterSet] {
        static SETS: LazyLock<Vec<ClusterSet>> = LazyLock::new(|| {
            vec![
                ClusterSet {
                    id: "dsm5_o".to_string(),
                    name: "CBCL DSM-5-O".to_string(),
                    clusters: vec![
                        cluster(
                            "cat1",
                            "Kategori 1",
                            &["5", "14", "18", "24", "35", "52", "54", "76", "77", "91", "100", "102", "103"],
                        ),
                        cluster(
                            "cat2",
                            "Kategori 2",
                            &["11", "29", "30", "31", "45", "47", "50", "71", "112"],
                        ),
                        cluster(
                            "cat3",
                            "Kategori 3",
                            &["56a", "56b", "56c", "56d", "56e", "56f", "56g"],
                        ),
                        cluster(
                            "cat4",
                            "Kategori 4",
                            &["4", "8", "10", "41", "78", "93", "104"],
                        ),
                        cluster("cat5", "Kategori 5", &["3", "22", "23", "86", "95"]),
                        cluster(
                            "cat6",
                            "Kategori 6",
                            &["15", "16", "21", "26", "28", "37", "39", "43", "57", "67", "72", "81", "82", "90", "97", "101", "106"],
                        ),
                    ],
                },
                ClusterSet {
                    id: "ss".to_string(),
                    name: "CBCL SS".to_string(),
                    clusters: vec![
                        cluster(
                            "i",
                            "I",
                            &["14", "29", "30", "31", "32", "33", "35", "45", "50", "52", "71", "91", "112"],
                        ),
                        cluster(
                            "ii",
                            "II",
                            &["5", "42", "65", "69", "75", "102", "103", "111"],
                        ),
                        cluster(
                            "iii",
                            "III",
                            &["47", "49", "51", "54", "56a", "56b", "56c", "56d", "56e", "56f", "56g"],
                        ),
                        cluster(
                            "iv",
                            "IV",
                            &["11", "12", "25", "27", "34", "36", "38", "48", "62", "64", "79"],
                        ),
                        cluster(
                            "v",
                            "V",
                            &["9", "18", "40", "46", "58", "59", "60", "66", "70", "76", "83", "84", "85", "92", "100"],
                        ),
                        cluster(
                            "vi",
                            "VI",
                            &["1", "4", "8", "10", "13", "17", "41", "61", "78", "80"],
                        ),
                        cluster(
                            "vii",
                            "VII",
                            &["2", "26", "28", "39", "43", "63", "67", "72", "73", "81", "82", "90", "96", "99", "101", "105", "106"],
                        ),
                        cluster(
                            "viii",
                            "VIII",
                            &["3", "16", "19", "20", "21", "22", "23", "37", "57", "68", "86", "87", "88", "89", "94", "95", "97", "104"],
                        ),
                        highlighted(
                            "o",
                            "O",
                            &["6", "7", "15", "24", "44", "53", "55", "56h", "74", "77", "93", "98", "107", "108", "109", "110", "113"],
                        ),
                    ],
                },
            ]
        });
        &SETS
    }
}
