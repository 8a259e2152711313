//! The static tree catalog and its derived genus index.

use std::collections::HashMap;

use crate::error::QuizError;
use crate::model::TreeRecord;

/// Fixed, ordered collection of tree records, loaded once and never mutated.
///
/// A genus-multiplicity index is built at construction: a genus carried by
/// two or more records does not uniquely identify a tree, so the engine
/// never asks for it nor shows it as a hint.
#[derive(Debug, Clone)]
pub struct TreeCatalog {
    name: String,
    trees: Vec<TreeRecord>,
    genus_multiplicity: HashMap<String, usize>,
}

impl TreeCatalog {
    /// Build a catalog from records. An empty list is rejected: the quiz
    /// cannot draw a random tree from an empty catalog.
    pub fn new(name: impl Into<String>, trees: Vec<TreeRecord>) -> Result<Self, QuizError> {
        if trees.is_empty() {
            return Err(QuizError::EmptyCatalog);
        }
        let mut genus_multiplicity: HashMap<String, usize> = HashMap::new();
        for tree in &trees {
            *genus_multiplicity.entry(tree.genus.clone()).or_insert(0) += 1;
        }
        Ok(Self {
            name: name.into(),
            trees,
            genus_multiplicity,
        })
    }

    /// The built-in catalog of 18 common European trees.
    pub fn builtin() -> Self {
        let trees = BUILTIN_TREES
            .iter()
            .map(|&(common_name, genus, species, image_path)| TreeRecord {
                common_name: common_name.to_string(),
                genus: genus.to_string(),
                species: species.to_string(),
                image_path: image_path.to_string(),
            })
            .collect();
        Self::new("Arbres communs d'Europe", trees).expect("built-in catalog is non-empty")
    }

    /// Human-readable catalog name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All records, in catalog order.
    pub fn trees(&self) -> &[TreeRecord] {
        &self.trees
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Always `false` for a constructed catalog; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Number of catalog records carrying `genus`.
    pub fn genus_multiplicity(&self, genus: &str) -> usize {
        self.genus_multiplicity.get(genus).copied().unwrap_or(0)
    }

    /// Whether `genus` is shared by two or more records, making it unfair
    /// to ask for.
    pub fn genus_is_ambiguous(&self, genus: &str) -> bool {
        self.genus_multiplicity(genus) > 1
    }
}

/// The tree records shipped with the quiz.
const BUILTIN_TREES: &[(&str, &str, &str, &str)] = &[
    ("Albizia", "Albizia", "julibrissim", "images/albizia.jpg"),
    ("Ailante", "Ailanthus", "altissima", "images/ailante.jpg"),
    ("Aulne glutineux", "Alnus", "glutinosa", "images/aulne.jpg"),
    ("Arbre de Judée", "Cercis", "siliquastrum", "images/arbre_judee.jpg"),
    ("Chêne pédonculé", "Quercus", "robur", "images/chene.jpg"),
    ("Érable sycomore", "Acer", "pseudoplatanus", "images/erable.jpg"),
    ("Hêtre", "Fagus", "sylvatica", "images/hetre.jpg"),
    ("Pin sylvestre", "Pinus", "sylvestris", "images/pin.jpg"),
    ("Saule pleureur", "Salix", "alba 'Tristis'", "images/saule.jpg"),
    ("Bouleau verruqueux", "Betula", "pendula", "images/bouleau.jpg"),
    ("Charme commun", "Carpinus", "betulus", "images/charme.jpg"),
    ("Marronnier d'Inde", "Aesculus", "hippocastanum", "images/marronnier.jpg"),
    ("Tilleul à grandes feuilles", "Tilia", "platyphyllos", "images/tilleul.jpg"),
    ("Robinier faux-acacia", "Robinia", "pseudoacacia", "images/robinier.jpg"),
    ("Platane commun", "Platanus", "x hispanica", "images/platane.jpg"),
    ("Orme champêtre", "Ulmus", "minor", "images/orme.jpg"),
    ("Peuplier noir", "Populus", "nigra", "images/peuplier.jpg"),
    ("If commun", "Taxus", "baccata", "images/if.jpg"),
];

/// Usage guide shown by the front ends.
pub const HELP_TEXT: &str = "\
Guide d'utilisation:

1. Choisissez un niveau de difficulté :
   - Facile : Un élément à deviner, tous les autres indices visibles
   - Moyen : Deux éléments à deviner, un indice visible

2. Pour chaque question :
   - Le nom commun (en français)
   - Le genre (en latin)
   - L'espèce (en latin)
3. Entrez votre réponse dans le champ texte
4. Cliquez sur 'Valider' ou appuyez sur Entrée
5. Pour passer à une nouvelle question, cliquez sur 'Nouvelle question'

Conseils:
- Les accents sont importants pour les noms français
- Vous avez trois essais avant que la réponse ne soit révélée
";

#[cfg(test)]
mod tests {
    use super::*;

    fn record(common_name: &str, genus: &str, species: &str) -> TreeRecord {
        TreeRecord {
            common_name: common_name.into(),
            genus: genus.into(),
            species: species.into(),
            image_path: String::new(),
        }
    }

    #[test]
    fn builtin_catalog_shape() {
        let catalog = TreeCatalog::builtin();
        assert_eq!(catalog.len(), 18);
        assert_eq!(catalog.name(), "Arbres communs d'Europe");
        assert!(!catalog.is_empty());
        assert_eq!(catalog.trees()[4].genus, "Quercus");
    }

    #[test]
    fn builtin_genera_are_all_unique() {
        let catalog = TreeCatalog::builtin();
        for tree in catalog.trees() {
            assert_eq!(
                catalog.genus_multiplicity(&tree.genus),
                1,
                "genus {} should be unique",
                tree.genus
            );
            assert!(!catalog.genus_is_ambiguous(&tree.genus));
        }
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = TreeCatalog::new("vide", vec![]).unwrap_err();
        assert_eq!(err, QuizError::EmptyCatalog);
        assert!(err.is_fatal());
    }

    #[test]
    fn shared_genus_is_counted_and_ambiguous() {
        let catalog = TreeCatalog::new(
            "chênes",
            vec![
                record("Chêne pédonculé", "Quercus", "robur"),
                record("Chêne vert", "Quercus", "ilex"),
                record("Hêtre", "Fagus", "sylvatica"),
            ],
        )
        .unwrap();
        assert_eq!(catalog.genus_multiplicity("Quercus"), 2);
        assert!(catalog.genus_is_ambiguous("Quercus"));
        assert_eq!(catalog.genus_multiplicity("Fagus"), 1);
        assert!(!catalog.genus_is_ambiguous("Fagus"));
        assert_eq!(catalog.genus_multiplicity("Pinus"), 0);
    }
}
