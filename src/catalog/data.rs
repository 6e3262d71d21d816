//! Static milestone reference table.
//!
//! The source table for the milestone catalog: one row per developmental
//! milestone, with percentile thresholds stored as integer hundredths of a
//! year. Names are kept in the original Spanish of the reference material.

use crate::models::milestone::{Area, MilestoneKind};

/// One row of the reference table: id, name, area, P75 and P90 thresholds
/// (hundredths of a year), milestone kind, and an approval-range note.
pub(crate) type MilestoneRow = (
    u32,
    &'static str,
    Area,
    i64,
    i64,
    MilestoneKind,
    &'static str,
);

/// The full reference table, in catalog order.
pub(crate) const MILESTONE_TABLE: &[MilestoneRow] = &[
    (1, "Comunicación con el observador", Area::PersonalSocial, 12, 27, MilestoneKind::Test, ""),
    (2, "Sonrisa social", Area::PersonalSocial, 12, 16, MilestoneKind::Test, ""),
    (3, "Actitud frente al espejo", Area::PersonalSocial, 39, 50, MilestoneKind::Test, ""),
    (4, "Se resiste a que le quiten un juguete", Area::PersonalSocial, 55, 68, MilestoneKind::Test, ""),
    (5, "Juega a las escondidas", Area::PersonalSocial, 55, 68, MilestoneKind::Test, ""),
    (6, "Busca objeto", Area::PersonalSocial, 76, 90, MilestoneKind::Test, ""),
    (7, "Da un objeto", Area::PersonalSocial, 108, 146, MilestoneKind::Test, ""),
    (8, "Juego simbólico", Area::PersonalSocial, 116, 152, MilestoneKind::Question, ""),
    (9, "Come solo", Area::PersonalSocial, 134, 144, MilestoneKind::Question, ""),
    (10, "Ayuda en tareas del hogar", Area::PersonalSocial, 125, 149, MilestoneKind::Question, ""),
    (11, "Acude al llamado del observador", Area::PersonalSocial, 158, 235, MilestoneKind::Test, ""),
    (12, "Imita tareas del hogar", Area::PersonalSocial, 129, 161, MilestoneKind::Question, ""),
    (13, "Se quita ropa o zapatos", Area::PersonalSocial, 242, 281, MilestoneKind::Test, ""),
    (14, "Se pone ropa o zapatos", Area::PersonalSocial, 263, 301, MilestoneKind::Question, ""),
    (15, "Control de esfínteres diurno", Area::PersonalSocial, 239, 271, MilestoneKind::Question, ""),
    (16, "Arma rompecabezas", Area::PersonalSocial, 274, 317, MilestoneKind::DemonstratedTest, ""),
    (17, "Aparea colores", Area::PersonalSocial, 362, 380, MilestoneKind::Test, "1-4"),
    (18, "Junta dibujos semejantes", Area::PersonalSocial, 474, 574, MilestoneKind::Test, ""),
    (19, "Seguimiento visual hasta la línea media", Area::FineMotor, 18, 21, MilestoneKind::Test, ""),
    (20, "Manos semiabiertas", Area::FineMotor, 17, 24, MilestoneKind::Test, ""),
    (21, "Mira su mano", Area::FineMotor, 26, 33, MilestoneKind::Question, ""),
    (22, "Junta manos", Area::FineMotor, 34, 42, MilestoneKind::Test, ""),
    (23, "Pasa un cubo de mano mirándolo", Area::FineMotor, 39, 45, MilestoneKind::Test, ""),
    (24, "Prensión cúbito palmar", Area::FineMotor, 51, 58, MilestoneKind::Test, ""),
    (25, "Prensión pinza superior", Area::FineMotor, 87, 99, MilestoneKind::Test, ""),
    (26, "Vierte / pasa de botella", Area::FineMotor, 127, 161, MilestoneKind::DemonstratedTest, ""),
    (27, "Introduce / pasa en botella", Area::FineMotor, 121, 146, MilestoneKind::Test, ""),
    (28, "Garabatea", Area::FineMotor, 126, 160, MilestoneKind::Test, ""),
    (29, "Torre de 4 cubos", Area::FineMotor, 166, 198, MilestoneKind::DemonstratedTest, ""),
    (30, "Torre de 8 cubos", Area::FineMotor, 261, 312, MilestoneKind::DemonstratedTest, ""),
    (31, "Corrige torre", Area::FineMotor, 314, 382, MilestoneKind::Test, ""),
    (32, "Imita puente", Area::FineMotor, 307, 366, MilestoneKind::DemonstratedTest, ""),
    (33, "Dibuja persona en 3 partes", Area::FineMotor, 407, 480, MilestoneKind::Test, ""),
    (34, "Copia cruz", Area::FineMotor, 422, 493, MilestoneKind::Test, ""),
    (35, "Dobla un papel en diagonal", Area::FineMotor, 448, 492, MilestoneKind::DemonstratedTest, ""),
    (36, "Dibuja persona en 6 partes", Area::FineMotor, 490, 572, MilestoneKind::Test, ""),
    (37, "Copia un triángulo", Area::FineMotor, 553, 587, MilestoneKind::Test, ""),
    (38, "Cocleo palpebral", Area::Language, 4, 4, MilestoneKind::Test, ""),
    (39, "Busca con la mirada a la madre", Area::Language, 47, 49, MilestoneKind::Test, ""),
    (40, "Respuesta al no", Area::Language, 59, 82, MilestoneKind::Test, ""),
    (41, "Silabeo da-da-da ta-ta-ta", Area::Language, 60, 70, MilestoneKind::Question, ""),
    (42, "Silabeo pa-pama-ma, no específico", Area::Language, 69, 80, MilestoneKind::Question, ""),
    (43, "papá-mamá específico", Area::Language, 136, 170, MilestoneKind::Question, ""),
    (44, "Palabra frase", Area::Language, 141, 189, MilestoneKind::Question, ""),
    (45, "Señala 2 figuras", Area::Language, 181, 225, MilestoneKind::Test, "2-4"),
    (46, "Tararea en presencia de terceros", Area::Language, 256, 284, MilestoneKind::Question, ""),
    (47, "Nombra 2 figuras", Area::Language, 226, 239, MilestoneKind::Test, "2-4"),
    (48, "Frase (sustantivo y verbo)", Area::Language, 216, 241, MilestoneKind::Question, ""),
    (49, "Dice su nombre completo", Area::Language, 281, 361, MilestoneKind::Test, ""),
    (50, "Frases completas", Area::Language, 263, 313, MilestoneKind::Question, ""),
    (51, "Comprende preposiciones", Area::Language, 344, 449, MilestoneKind::Test, "3-4"),
    (52, "Cumple 2 indicaciones consecutivas", Area::Language, 364, 461, MilestoneKind::Test, ""),
    (53, "Analogías opuestas", Area::Language, 360, 428, MilestoneKind::Test, "2-3"),
    (54, "Uso de 2 objetos", Area::Language, 381, 491, MilestoneKind::Test, ""),
    (55, "Reconoce 3 colores", Area::Language, 441, 470, MilestoneKind::Test, ""),
    (56, "Sabe por qué es de día o de noche", Area::Language, 469, 544, MilestoneKind::Test, ""),
    (57, "Sostén cefálico", Area::GrossMotor, 13, 21, MilestoneKind::Test, ""),
    (58, "Levanta cabeza 45º", Area::GrossMotor, 20, 24, MilestoneKind::Test, ""),
    (59, "Posición en línea media", Area::GrossMotor, 21, 29, MilestoneKind::Test, ""),
    (60, "Desaparición del Moro completo simétrico", Area::GrossMotor, 22, 23, MilestoneKind::Test, ""),
    (61, "Palanca", Area::GrossMotor, 35, 41, MilestoneKind::Test, ""),
    (62, "Trípode", Area::GrossMotor, 43, 49, MilestoneKind::Test, ""),
    (63, "Pasa de posición dorsal a lateral", Area::GrossMotor, 46, 48, MilestoneKind::Test, ""),
    (64, "Sentado alcanza objeto", Area::GrossMotor, 62, 75, MilestoneKind::Test, ""),
    (65, "Sentado sin sostén", Area::GrossMotor, 59, 65, MilestoneKind::Test, ""),
    (66, "Logra pararse", Area::GrossMotor, 89, 95, MilestoneKind::Test, ""),
    (67, "Camina sujeto a muebles", Area::GrossMotor, 88, 98, MilestoneKind::Question, ""),
    (68, "Camina de la mano", Area::GrossMotor, 94, 104, MilestoneKind::Test, ""),
    (69, "Camina solo", Area::GrossMotor, 113, 125, MilestoneKind::Test, ""),
    (70, "Se agacha y se levanta sin sostén", Area::GrossMotor, 112, 130, MilestoneKind::Test, ""),
    (71, "Patea pelota", Area::GrossMotor, 128, 178, MilestoneKind::DemonstratedTest, ""),
    (72, "Sube a una silla o sillón sin ayuda", Area::GrossMotor, 135, 156, MilestoneKind::Question, ""),
    (73, "Lanza pelota al examinador", Area::GrossMotor, 185, 242, MilestoneKind::Test, ""),
    (74, "Salta con ambos pies", Area::GrossMotor, 248, 283, MilestoneKind::DemonstratedTest, ""),
    (75, "Se para en un pie 5''", Area::GrossMotor, 308, 380, MilestoneKind::DemonstratedTest, ""),
    (76, "Salto amplio", Area::GrossMotor, 303, 381, MilestoneKind::Test, ""),
    (77, "Salta en un pie", Area::GrossMotor, 395, 469, MilestoneKind::DemonstratedTest, ""),
    (78, "Camina talón punta", Area::GrossMotor, 436, 511, MilestoneKind::DemonstratedTest, ""),
    (79, "Retrocede talón punta", Area::GrossMotor, 528, 595, MilestoneKind::DemonstratedTest, ""),
];
