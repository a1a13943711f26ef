//! Special stars: fixed single-key lookups against a chart's pillars.
//!
//! Each star is keyed by either the day master, the month branch, or the year
//! branch's harmony group, and sits in whichever pillar holds the target stem
//! or branch.

use serde::Serialize;

use crate::branch_relation::THREE_HARMONIES;
use crate::cycle::{Branch, Chart, PillarPosition, Stem};

use Branch::*;

/// Whether a star is favourable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StarKind {
    Auspicious,
    Inauspicious,
}

/// A star found in a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialStar {
    pub name: &'static str,
    pub kind: StarKind,
    pub position: PillarPosition,
    pub description: &'static str,
}

/// Stars found in one chart, split by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpecialStars {
    pub auspicious: Vec<SpecialStar>,
    pub inauspicious: Vec<SpecialStar>,
}

impl SpecialStars {
    fn push(&mut self, star: SpecialStar) {
        match star.kind {
            StarKind::Auspicious => self.auspicious.push(star),
            StarKind::Inauspicious => self.inauspicious.push(star),
        }
    }
}

struct StarInfo {
    name: &'static str,
    kind: StarKind,
    description: &'static str,
}

const HEAVENLY_NOBLE: StarInfo = StarInfo {
    name: "天乙貴人",
    kind: StarKind::Auspicious,
    description: "The highest auspicious star. Helpers appear in hard times; steady development in middle and later life.",
};
const HEAVENLY_VIRTUE: StarInfo = StarInfo {
    name: "天徳貴人",
    kind: StarKind::Auspicious,
    description: "Receives the virtue of heaven. Escapes misfortune; affairs go smoothly.",
};
const MONTHLY_VIRTUE: StarInfo = StarInfo {
    name: "月徳貴人",
    kind: StarKind::Auspicious,
    description: "Receives the virtue of the moon. Well regarded socially.",
};
const FORTUNE_STAR: StarInfo = StarInfo {
    name: "福星貴人",
    kind: StarKind::Auspicious,
    description: "Blessed with fortune and virtue. Favourable for wealth.",
};
const LITERARY_STAR: StarInfo = StarInfo {
    name: "文昌貴人",
    kind: StarKind::Auspicious,
    description: "Talent for learning and the arts. Gifted intellect.",
};
const GOAT_BLADE: StarInfo = StarInfo {
    name: "羊刃",
    kind: StarKind::Inauspicious,
    description: "Fierce and impulsive temperament. Risk of injury or accidents; blunt speech.",
};

/// Year-branch stars, targets indexed like `THREE_HARMONIES`
/// (申子辰, 亥卯未, 寅午戌, 巳酉丑).
const YEAR_GROUP_STARS: [(StarInfo, [Branch; 4]); 6] = [
    (
        StarInfo {
            name: "孤辰",
            kind: StarKind::Inauspicious,
            description: "Suggests solitude and thin family ties. Strongly independent.",
        },
        [Shen, Hai, Yin, Si],
    ),
    (
        StarInfo {
            name: "寡宿",
            kind: StarKind::Inauspicious,
            description: "Thin ties with a spouse. Emotional isolation.",
        },
        [Chen, Wei, Xu, Chou],
    ),
    (
        StarInfo {
            name: "駅馬",
            kind: StarKind::Inauspicious,
            description: "Movement, change and travel. Frequent job or home changes; restless.",
        },
        [Yin, Si, Shen, Hai],
    ),
    (
        StarInfo {
            name: "亡神",
            kind: StarKind::Inauspicious,
            description: "Sudden misfortune. Financial loss; plans that fail.",
        },
        [Si, Yin, Hai, Shen],
    ),
    (
        StarInfo {
            name: "劫殺",
            kind: StarKind::Inauspicious,
            description: "Sudden trouble. Beware of theft.",
        },
        [Hai, Shen, Si, Yin],
    ),
    (
        StarInfo {
            name: "桃花",
            kind: StarKind::Inauspicious,
            description: "Romantic attraction. Popular with others; prone to romantic trouble.",
        },
        [You, Zi, Mao, Wu],
    ),
];

fn heavenly_noble_branches(day_master: Stem) -> [Branch; 2] {
    match day_master {
        Stem::Jia | Stem::Wu => [Chou, Wei],
        Stem::Yi | Stem::Ji => [Zi, Shen],
        Stem::Bing | Stem::Ding => [Hai, You],
        Stem::Geng | Stem::Xin => [Yin, Wu],
        Stem::Ren | Stem::Gui => [Si, Mao],
    }
}

fn fortune_star_branch(day_master: Stem) -> Branch {
    match day_master {
        Stem::Jia => Yin,
        Stem::Yi => Mao,
        Stem::Bing | Stem::Wu => Si,
        Stem::Ding | Stem::Ji => Wu,
        Stem::Geng => Shen,
        Stem::Xin => You,
        Stem::Ren => Hai,
        Stem::Gui => Zi,
    }
}

fn literary_star_branch(day_master: Stem) -> Branch {
    match day_master {
        Stem::Jia | Stem::Yi => Si,
        Stem::Bing | Stem::Ding => Wu,
        Stem::Wu | Stem::Ji => Shen,
        Stem::Geng | Stem::Xin => You,
        Stem::Ren | Stem::Gui => Hai,
    }
}

fn goat_blade_branch(day_master: Stem) -> Branch {
    match day_master {
        Stem::Jia => Mao,
        Stem::Yi => Yin,
        Stem::Bing | Stem::Wu => Wu,
        Stem::Ding | Stem::Ji => Si,
        Stem::Geng => You,
        Stem::Xin => Shen,
        Stem::Ren => Zi,
        Stem::Gui => Hai,
    }
}

fn heavenly_virtue_stem(month_branch: Branch) -> Stem {
    match month_branch {
        Zi => Stem::Ding,
        Chou | Hai => Stem::Jia,
        Yin => Stem::Gui,
        Mao => Stem::Geng,
        Chen | Xu => Stem::Xin,
        Si => Stem::Bing,
        Wu => Stem::Yi,
        Wei => Stem::Wu,
        Shen => Stem::Ji,
        You => Stem::Ren,
    }
}

fn monthly_virtue_stem(month_branch: Branch) -> Stem {
    match month_branch {
        Yin | Wu | Xu => Stem::Bing,
        Shen | Zi | Chen => Stem::Ren,
        Si | You | Chou => Stem::Geng,
        Hai | Mao | Wei => Stem::Jia,
    }
}

/// Position of the first pillar (year → hour) holding `branch`.
fn first_position(chart: &Chart, branch: Branch) -> Option<PillarPosition> {
    chart
        .pillars()
        .into_iter()
        .find(|(_, p)| p.branch == branch)
        .map(|(pos, _)| pos)
}

fn star(info: &StarInfo, position: PillarPosition) -> SpecialStar {
    SpecialStar {
        name: info.name,
        kind: info.kind,
        position,
        description: info.description,
    }
}

/// Every special star present in `chart`.
pub fn special_stars(chart: &Chart) -> SpecialStars {
    let day_master = chart.day_master();
    let month_branch = chart.month.branch;
    let mut stars = SpecialStars::default();

    let noble = heavenly_noble_branches(day_master);
    for (position, pillar) in chart.pillars() {
        if noble.contains(&pillar.branch) {
            stars.push(star(&HEAVENLY_NOBLE, position));
        }
    }

    for (info, target) in [
        (&HEAVENLY_VIRTUE, heavenly_virtue_stem(month_branch)),
        (&MONTHLY_VIRTUE, monthly_virtue_stem(month_branch)),
    ] {
        for (position, pillar) in chart.pillars() {
            if pillar.stem == target {
                stars.push(star(info, position));
            }
        }
    }

    for (info, target) in [
        (&FORTUNE_STAR, fortune_star_branch(day_master)),
        (&LITERARY_STAR, literary_star_branch(day_master)),
        (&GOAT_BLADE, goat_blade_branch(day_master)),
    ] {
        if let Some(position) = first_position(chart, target) {
            stars.push(star(info, position));
        }
    }

    let year_group = THREE_HARMONIES
        .iter()
        .position(|t| t.branches.contains(&chart.year.branch));
    if let Some(group) = year_group {
        for (info, targets) in &YEAR_GROUP_STARS {
            let target = targets[group];
            if let Some(position) = first_position(chart, target) {
                stars.push(star(info, position));
            }
        }
    }

    tracing::debug!(
        auspicious = stars.auspicious.len(),
        inauspicious = stars.inauspicious.len(),
        "Found special stars"
    );
    stars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::Pillar;

    fn chart_1982() -> Chart {
        // 壬戌 庚子 己巳 己巳
        Chart {
            year: Pillar::new(Stem::Ren, Xu),
            month: Pillar::new(Stem::Geng, Zi),
            day: Pillar::new(Stem::Ji, Si),
            hour: Pillar::new(Stem::Ji, Si),
        }
    }

    fn names(stars: &[SpecialStar]) -> Vec<(&'static str, PillarPosition)> {
        stars.iter().map(|s| (s.name, s.position)).collect()
    }

    #[test]
    fn test_every_year_branch_has_a_group() {
        for b in Branch::ALL {
            assert!(THREE_HARMONIES.iter().any(|t| t.branches.contains(&b)));
        }
    }

    #[test]
    fn test_stars_for_sample_chart() {
        let stars = special_stars(&chart_1982());

        // 己: noble at 子/申 → month; 子 month: heavenly virtue 丁 (absent),
        // monthly virtue 壬 → year; fortune star 午 absent; literary 申 absent
        assert_eq!(
            names(&stars.auspicious),
            vec![("天乙貴人", PillarPosition::Month), ("月徳貴人", PillarPosition::Year)]
        );

        // goat blade 巳 first held by the day pillar; 戌 year → fire group:
        // lonely 寅, widow 戌, horse 申, death spirit 亥, robbery 巳, peach 卯
        assert_eq!(
            names(&stars.inauspicious),
            vec![
                ("羊刃", PillarPosition::Day),
                ("寡宿", PillarPosition::Year),
                ("劫殺", PillarPosition::Day),
            ]
        );
        assert!(stars.inauspicious.iter().all(|s| s.kind == StarKind::Inauspicious));
    }

    #[test]
    fn test_heavenly_noble_reports_each_pillar() {
        let chart = Chart {
            year: Pillar::new(Stem::Jia, Chou),
            month: Pillar::new(Stem::Jia, Chou),
            day: Pillar::new(Stem::Jia, Wei),
            hour: Pillar::new(Stem::Jia, Zi),
        };
        let noble: Vec<PillarPosition> = special_stars(&chart)
            .auspicious
            .iter()
            .filter(|s| s.name == "天乙貴人")
            .map(|s| s.position)
            .collect();
        assert_eq!(
            noble,
            vec![PillarPosition::Year, PillarPosition::Month, PillarPosition::Day]
        );
    }
}
