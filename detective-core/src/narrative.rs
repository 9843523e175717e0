//! Text rendering for notices, reports and verdicts.
//!
//! Every function returns plain lines so front ends can print them, log them
//! or compare them in tests.

use crate::accusation::{Accusation, Verdict, REQUIRED_CLUES};
use crate::explore::Notice;
use crate::session::FinalReport;
use crate::world::Direction;

const RULE: &str = "========================================";

fn side(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "esquerda",
        Direction::Right => "direita",
    }
}

/// Welcome text shown before the first room.
pub fn banner(title: &str) -> Vec<String> {
    vec![
        format!("=== BEM-VINDO AO {} ===", title.to_uppercase()),
        "Explore a mansao misteriosa, colete pistas e desvende quem e o culpado!".to_string(),
        "Use 'e' para ir a esquerda, 'd' para direita e 's' para encerrar.".to_string(),
        "As pistas serao associadas automaticamente aos suspeitos!".to_string(),
        "No final, voce devera fazer uma acusacao baseada nas evidencias!".to_string(),
    ]
}

/// Lines for one notice.
pub fn notice_lines(notice: &Notice) -> Vec<String> {
    match notice {
        Notice::Entered { room } => vec![String::new(), format!("Voce esta na: {room}")],
        Notice::ClueFound { clue, suspect, new } => {
            let mut lines = vec![
                String::new(),
                "*** PISTA ENCONTRADA! ***".to_string(),
                format!("Pista: {clue}"),
            ];
            match suspect {
                Some(suspect) => lines.push(format!("Esta pista aponta para: {suspect}")),
                None => lines.push("Pista nao associada a nenhum suspeito conhecido.".to_string()),
            }
            if *new {
                lines.push("Pista adicionada ao seu caderno de investigacao!".to_string());
            } else {
                lines.push("Esta pista ja esta no seu caderno de investigacao.".to_string());
            }
            lines
        }
        Notice::NoClue => vec![
            String::new(),
            "Esta sala nao contem pistas visiveis.".to_string(),
        ],
        Notice::DeadEnd => vec![
            String::new(),
            "Voce chegou ao fim deste caminho!".to_string(),
            "Esta sala nao possui mais saidas.".to_string(),
            "Pressione 's' para sair ou explore outro caminho.".to_string(),
        ],
        Notice::Exits { left, right } => {
            let mut lines = vec![String::new(), "Opcoes de navegacao:".to_string()];
            if let Some(left) = left {
                lines.push(format!("({}) - Ir para a esquerda: {left}", Direction::Left.key()));
            }
            if let Some(right) = right {
                lines.push(format!("({}) - Ir para a direita: {right}", Direction::Right.key()));
            }
            lines.push("(s) - Encerrar investigacao e fazer acusacao final".to_string());
            lines
        }
        Notice::Moving(direction) => vec![String::new(), format!("Movendo-se para a {}...", side(*direction))],
        Notice::InvalidMove(direction) => vec![
            String::new(),
            format!("Nao ha caminho a {}! Tente outra direcao.", side(*direction)),
        ],
        Notice::Unrecognized(_) => vec![
            String::new(),
            "Opcao invalida! Use 'e' para esquerda, 'd' para direita ou 's' para sair.".to_string(),
        ],
        Notice::SessionEnded => vec![
            String::new(),
            "=== RELATORIO FINAL DE INVESTIGACAO ===".to_string(),
            "Investigacao da mansao encerrada!".to_string(),
        ],
        Notice::AlreadyEnded => vec!["A investigacao ja foi encerrada.".to_string()],
    }
}

/// Lines for a sequence of notices.
pub fn notices_lines<'a>(notices: impl IntoIterator<Item = &'a Notice>) -> Vec<String> {
    notices.into_iter().flat_map(notice_lines).collect()
}

/// The collected clues, numbered from 1.
pub fn report_lines(report: &FinalReport) -> Vec<String> {
    if !report.has_evidence() {
        return vec![
            String::new(),
            "Nenhuma pista foi coletada durante a investigacao.".to_string(),
            "Impossivel fazer uma acusacao sem evidencias!".to_string(),
        ];
    }

    let mut lines = vec![
        String::new(),
        "Pistas coletadas (em ordem alfabetica):".to_string(),
        RULE.to_string(),
    ];
    lines.extend(
        report
            .clues
            .iter()
            .enumerate()
            .map(|(i, clue)| format!("{}. {clue}", i + 1)),
    );
    lines.push(RULE.to_string());
    lines.push(format!("Total de pistas coletadas: {}", report.clues.len()));
    lines
}

/// Prompt text before the accusation.
pub fn accusation_prompt(suspects: &[&str]) -> Vec<String> {
    vec![
        String::new(),
        "=== FASE DE ACUSACAO FINAL ===".to_string(),
        "Com base nas pistas coletadas, voce deve fazer sua acusacao!".to_string(),
        format!("Suspeitos disponiveis: {}", suspects.join(", ")),
    ]
}

/// The evidence analysis and verdict.
pub fn verdict_lines(accusation: &Accusation) -> Vec<String> {
    let accused = &accusation.accused;
    let count = accusation.match_count();

    let mut lines = vec![
        String::new(),
        "=== ANALISE DAS EVIDENCIAS ===".to_string(),
        format!("Suspeito acusado: {accused}"),
        format!("Pistas que apontam para {accused}: {count}"),
    ];

    if count > 0 {
        lines.push(String::new());
        lines.push("Pistas encontradas:".to_string());
        lines.extend(accusation.supporting.iter().map(|c| format!("   - {c}")));
    }

    lines.push(String::new());
    lines.push("=== VEREDICTO ===".to_string());
    match accusation.verdict {
        Verdict::Solved => {
            lines.push("*** PARABENS! ***".to_string());
            lines.push("Voce resolveu o caso com sucesso!".to_string());
            lines.push(format!(
                "Ha evidencias suficientes ({count} pistas) para sustentar sua acusacao."
            ));
            lines.push(format!("{accused} foi preso(a) e confessou o crime!"));
            lines.push("A mansao misteriosa finalmente pode descansar em paz.".to_string());
        }
        Verdict::OneClue | Verdict::NoClues => {
            lines.push("*** CASO NAO RESOLVIDO ***".to_string());
            lines.push("Evidencias insuficientes para uma condenacao.".to_string());
            lines.push(format!(
                "Voce precisa de pelo menos {REQUIRED_CLUES} pistas convincentes para sustentar a acusacao."
            ));
            if accusation.verdict == Verdict::OneClue {
                lines.push("Apenas 1 pista foi encontrada - nao e suficiente para o tribunal.".to_string());
            } else {
                lines.push(format!("Nenhuma pista aponta para {accused}."));
            }
            lines.push("O caso permanece em aberto...".to_string());
        }
    }
    lines
}

pub fn farewell(title: &str) -> String {
    format!("Obrigado por jogar {title}!")
}
