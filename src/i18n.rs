//! Static translations and language selection.
//!
//! The UI treats every string as opaque; the one exception is
//! [`tokenize_label`], which splits a redstone label into text and symbol
//! runs so the symbols can be styled differently. Content and ordering are
//! preserved exactly.

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    pub fn text(self) -> &'static Translations {
        match self {
            Self::En => &EN,
            Self::Zh => &ZH,
        }
    }
}

pub struct Translations {
    pub nav: NavText,
    pub hero: HeroText,
    pub showcase: ShowcaseText,
    pub highlights: HighlightsText,
    pub redstone: RedstoneText,
    pub footer: FooterText,
}

pub struct NavText {
    pub showcase: &'static str,
    pub highlights: &'static str,
    pub redstone: &'static str,
    pub download: &'static str,
}

pub struct HeroText {
    pub title_line1: &'static str,
    pub title_line2: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub loading: &'static str,
    pub hotspots: &'static [(&'static str, &'static str)],
}

impl HeroText {
    pub fn hotspot_label(&self, id: &str) -> &'static str {
        lookup(self.hotspots, id).unwrap_or("")
    }
}

pub struct ShowcaseText {
    pub total_count: &'static str,
    pub million: &'static str,
    pub blocks: &'static str,
    pub footnote: &'static str,
    pub view_isometric: &'static str,
    pub view_no_balloons: &'static str,
    pub view_top_down: &'static str,
    pub block_names: &'static [(&'static str, &'static str)],
}

impl ShowcaseText {
    /// Falls back to the untranslated block name.
    pub fn block_name<'a>(&self, name: &'a str) -> &'a str {
        lookup(self.block_names, name).unwrap_or(name)
    }
}

pub struct CardText {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct HighlightsText {
    pub section_title: &'static str,
    pub section_subtitle: &'static str,
    pub cards: &'static [CardText],
}

impl HighlightsText {
    /// Falls back to the raw id, so the return borrows from the caller's
    /// key rather than the table.
    pub fn card_title<'a>(&self, id: &'a str) -> &'a str {
        self.card(id).map(|card| card.title).unwrap_or(id)
    }

    pub fn card_description(&self, id: &str) -> &'static str {
        self.card(id).map(|card| card.description).unwrap_or("")
    }

    fn card(&self, id: &str) -> Option<&'static CardText> {
        self.cards.iter().find(|card| card.id == id)
    }
}

pub struct ItemText {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub struct RedstoneText {
    pub section_title: &'static str,
    pub technical_word: &'static str,
    pub subtitle: &'static str,
    pub belief: &'static str,
    pub learn_more: &'static str,
    pub items: &'static [ItemText],
}

impl RedstoneText {
    pub fn item_label<'a>(&self, key: &'a str) -> &'a str {
        self.item(key).map(|item| item.label).unwrap_or(key)
    }

    pub fn item_description(&self, key: &str) -> &'static str {
        self.item(key).map(|item| item.description).unwrap_or("")
    }

    fn item(&self, key: &str) -> Option<&'static ItemText> {
        self.items.iter().find(|item| item.key == key)
    }
}

pub struct FooterText {
    pub tagline: &'static str,
    pub copyright: &'static str,
}

fn lookup(
    table: &'static [(&'static str, &'static str)],
    key: &str,
) -> Option<&'static str> {
    table
        .iter()
        .find(|(entry, _)| *entry == key)
        .map(|(_, value)| *value)
}

/// One run of a tokenized label.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LabelPart<'a> {
    Text(&'a str),
    Symbol(&'a str),
}

const LABEL_SYMBOLS: &[char] = &['-', '(', ')', '4'];

/// Splits a label into plain text and single-character symbol runs for the
/// fixed set `- ( ) 4`. Purely cosmetic; concatenating the parts yields the
/// input unchanged.
pub fn tokenize_label(label: &str) -> Vec<LabelPart<'_>> {
    let mut parts = Vec::new();
    let mut run_start = 0;

    for (offset, character) in label.char_indices() {
        if LABEL_SYMBOLS.contains(&character) {
            if run_start < offset {
                parts.push(LabelPart::Text(&label[run_start..offset]));
            }
            let end = offset + character.len_utf8();
            parts.push(LabelPart::Symbol(&label[offset..end]));
            run_start = end;
        }
    }

    if run_start < label.len() {
        parts.push(LabelPart::Text(&label[run_start..]));
    }

    parts
}

pub static EN: Translations = Translations {
    nav: NavText {
        showcase: "Showcase",
        highlights: "Highlights",
        redstone: "Redstone",
        download: "Download",
    },
    hero: HeroText {
        title_line1: "Frost",
        title_line2: "Pursuit",
        subtitle: "The Ultimate Ice Boat Racing.",
        cta: "Download Map",
        loading: "Loading Frost Pursuit...",
        hotspots: &[
            ("spectator-loft", "Spectator Loft"),
            ("main-lounge", "Main Lounge"),
            ("cable-car", "Cable Car"),
        ],
    },
    showcase: ShowcaseText {
        total_count: "7.5",
        million: "MILLION",
        blocks: "BLOCKS",
        footnote: "*Adjusted for SMP",
        view_isometric: "Isometric",
        view_no_balloons: "No Balloons",
        view_top_down: "Top Down",
        block_names: &[
            ("Packed Ice", "Packed Ice"),
            ("Blue Ice", "Blue Ice"),
            ("Light Blue Concrete Powder", "Light Blue Concrete Powder"),
            ("Stone", "Stone"),
            ("Acacia Log", "Acacia Log"),
            ("Tuff", "Tuff"),
            ("Snow", "Snow"),
            ("Barrier", "Barrier"),
            ("Deepslate", "Deepslate"),
            ("Andesite", "Andesite"),
        ],
    },
    highlights: HighlightsText {
        section_title: "Map Highlights",
        section_subtitle: "in-game screenshots",
        cards: &[
            CardText {
                id: "track",
                title: "Track",
                description: "Experience the thrilling ice boat racing track with dynamic loops and challenging turns.",
            },
            CardText {
                id: "main-lounge",
                title: "Main Lounge",
                description: "A cozy gathering space for players to relax and socialize between races.",
            },
            CardText {
                id: "spectator-loft",
                title: "Spectator Loft",
                description: "Watch the races unfold from the best seats in the house.",
            },
            CardText {
                id: "ice-caves",
                title: "Ice Caves",
                description: "Explore the mysterious frozen caverns beneath the racing grounds.",
            },
            CardText {
                id: "cable-car",
                title: "Cable Car",
                description: "Scenic transportation system connecting different areas of the map.",
            },
            CardText {
                id: "miscellaneous",
                title: "Miscellaneous",
                description: "Discover hidden details and decorative elements throughout the map.",
            },
        ],
    },
    redstone: RedstoneText {
        section_title: "Going",
        technical_word: "Technical",
        subtitle: "Powered by redstone",
        belief: "Our map is fully powered by redstone. No mods, no command blocks, experience the race in pure vanilla.",
        learn_more: "Learn More",
        items: &[
            ItemText {
                key: "Overview",
                label: "Overview",
                description: "A complete view of the underlying redstone system used in Frost Pursuit, featuring timer, sorted leaderboards, and display modules working in unison.",
            },
            ItemText {
                key: "Main Computations System",
                label: "Main Computations System",
                description: "The core logic system coordinates individual components, handling multiple player IDs and their ranking data to facilitate seamless race management.",
            },
            ItemText {
                key: "Initial Race Registration UI",
                label: "Initial Race Registration UI",
                description: "The starting point for new racers to register. Accepts 63 named items, splitting into IDs and sorting placeholders for the system.",
            },
            ItemText {
                key: "Race Whitelist Login UI",
                label: "Race Whitelist Login UI",
                description: "Stores historic registrations for returning players to login. It functions as a whitelist checker at the finish line to verify IDs before recording scores.",
            },
            ItemText {
                key: "3-Layer Timer with Shift Registers",
                label: "3-Layer Timer with Shift Registers",
                description: "A high-precision clock down to the seconds. Uses synchronous carry logic to prevent display ghosting.",
            },
            ItemText {
                key: "3-bit Adder",
                label: "3-bit Adder",
                description: "A logic component used within the timer and calculation modules to handle binary additions and signal processing.",
            },
            ItemText {
                key: "Insertion Sort Module",
                label: "Insertion Sort Module",
                description: "When toggled, it compares new race times against top 10 records, inserting better scores and shifting others down.",
            },
            ItemText {
                key: "Insertion Sort Unit",
                label: "Insertion Sort Unit",
                description: "Optimized sorting cell used within the insertion sort module. Stores one player's data and handles the comparison logic to determine rank placement.",
            },
            ItemText {
                key: "Generated Box UI Reverse Loader",
                label: "Generated Box UI Reverse Loader",
                description: "Manually triggers the generation of the leaderboard chest, organizing player items into the correct ranking order.",
            },
            ItemText {
                key: "Analog-7 Segment Display-Binary Converter",
                label: "Analog-7 Segment Display-Binary Converter",
                description: "Converts internal binary signals into readable analog formats for the seven-segment display units.",
            },
            ItemText {
                key: "26-Bit Serial Binary Box Transcoder",
                label: "26-Bit Serial Binary Box Transcoder",
                description: "Encodes complex race data into a serial binary format for reliable transmission across dimensions or long distances.",
            },
            ItemText {
                key: "26-Bit 4gt Serial Binary Box Decoder",
                label: "26-Bit 4gt Serial Binary Box Decoder",
                description: "Decodes the 26-bit serial signal back into usable parallel data for the display or storage systems with 4-gametick speed.",
            },
            ItemText {
                key: "23-Bit Mini Time Display",
                label: "23-Bit Mini Time Display",
                description: "A compact display module handling precise time visualizations during the race.",
            },
            ItemText {
                key: "Nether Portal Chunk Loader",
                label: "Nether Portal Chunk Loader",
                description: "Keeps the redstone chunks loaded via Nether portals, ensuring the system runs continuously even when players are far away.",
            },
            ItemText {
                key: "10-item Simple Reverser",
                label: "10-item Simple Reverser",
                description: "A utility module that reverses item streams, used for organizing data or resetting system states.",
            },
            ItemText {
                key: "Process Manager (Priority Queue Based)",
                label: "Process Manager (Priority Queue Based)",
                description: "Prevents logic conflicts by queuing tasks like queries, inputs, and syncs, ensuring only one runs at a time.",
            },
            ItemText {
                key: "Modular Display Unit",
                label: "Modular Display Unit",
                description: "A standalone digit unit for the main display, designed to be stackable and easily linked for multi-digit time keeping.",
            },
            ItemText {
                key: "Low-Latency Comparator Chain Unit",
                label: "Low-Latency Comparator Chain Unit",
                description: "Uses comparator logic to transmit analog signals instantly over vertical distances, bypassing standard redstone delay.",
            },
            ItemText {
                key: "Latency-Free Analog Downlink (BED Encoded)",
                label: "Latency-Free Analog Downlink (BED Encoded)",
                description: "Uses Block Event Delay (BED) encoding to send signals downwards instantly, crucial for the \"Nether Display\" system.",
            },
            ItemText {
                key: "Instant Item Catcher (Separates Boat and ID)",
                label: "Instant Item Catcher (Separates Boat and ID)",
                description: "The finish line mechanism. Instantly separates inputs from the player's boat and their ID card to trigger the finish logic.",
            },
        ],
    },
    footer: FooterText {
        tagline: "A vanilla Minecraft ice boat racing experience",
        copyright: "© 2024 Frost Pursuit. All rights reserved.",
    },
};

pub static ZH: Translations = Translations {
    nav: NavText {
        showcase: "地圖展示",
        highlights: "亮點景觀",
        redstone: "紅石系統",
        download: "下載",
    },
    hero: HeroText {
        title_line1: "冰寒",
        title_line2: "追霜",
        subtitle: "突破极限的冰船赛道",
        cta: "下載地圖",
        loading: "正在載入冰寒追霜...",
        hotspots: &[
            ("spectator-loft", "觀眾席"),
            ("main-lounge", "主大廳"),
            ("cable-car", "纜車"),
        ],
    },
    showcase: ShowcaseText {
        total_count: "750",
        million: "萬",
        blocks: "方塊",
        footnote: "*已針對SMP調整",
        view_isometric: "等距視圖",
        view_no_balloons: "無氣球",
        view_top_down: "俯視圖",
        block_names: &[
            ("Packed Ice", "浮冰"),
            ("Blue Ice", "藍冰"),
            ("Light Blue Concrete Powder", "淺藍色混凝土粉末"),
            ("Stone", "石頭"),
            ("Acacia Log", "相思木原木"),
            ("Tuff", "凝灰岩"),
            ("Snow", "雪"),
            ("Barrier", "屏障"),
            ("Deepslate", "深板岩"),
            ("Andesite", "安山岩"),
        ],
    },
    highlights: HighlightsText {
        section_title: "地圖亮點",
        section_subtitle: "遊戲內截圖",
        cards: &[
            CardText {
                id: "track",
                title: "賽道",
                description: "體驗刺激的冰船競速賽道，包含動態迴環和具挑戰性的轉彎。",
            },
            CardText {
                id: "main-lounge",
                title: "主大廳",
                description: "温馨的聚會空間，供玩家在比賽間歇放鬆和社交。",
            },
            CardText {
                id: "spectator-loft",
                title: "觀眾席",
                description: "從最佳座位觀看比賽進行。",
            },
            CardText {
                id: "ice-caves",
                title: "冰洞",
                description: "探索賽道下方神秘的冰凍洞穴。",
            },
            CardText {
                id: "cable-car",
                title: "纜車",
                description: "連接地圖不同區域的景觀運輸系統。",
            },
            CardText {
                id: "miscellaneous",
                title: "其他",
                description: "發現地圖中的隱藏細節和裝飾元素。",
            },
        ],
    },
    redstone: RedstoneText {
        section_title: "深入",
        technical_word: "技術",
        subtitle: "由紅石驅動",
        belief: "我們的地圖完全由紅石驅動。無模組、無命令方塊，體驗純原版競速。",
        learn_more: "了解更多",
        items: &[
            ItemText {
                key: "Overview",
                label: "系統概覽",
                description: "冰寒追霜底層紅石系統的完整視圖，包含計時器、排序排行榜和顯示模塊協同運作。",
            },
            ItemText {
                key: "Main Computations System",
                label: "主計算系統",
                description: "核心邏輯系統協調各個組件，處理多個玩家ID及其排名數據，實現無縫的比賽管理。",
            },
            ItemText {
                key: "Initial Race Registration UI",
                label: "初次比賽UI",
                description: "新選手註冊的起點。接受63個命名物品，分成ID和排序佔位符。",
            },
            ItemText {
                key: "Race Whitelist Login UI",
                label: "比賽白名單登入UI",
                description: "儲存歷史註冊資料供老玩家登入。在終點作為白名單檢查器，驗證ID後記錄成績。",
            },
            ItemText {
                key: "3-Layer Timer with Shift Registers",
                label: "三層計時器+移位寄存器",
                description: "精確到秒的高精度時鐘。使用同步進位邏輯防止顯示殘影。",
            },
            ItemText {
                key: "3-bit Adder",
                label: "三位加法器",
                description: "計時器和計算模塊中使用的邏輯組件，處理二進制加法和信號處理。",
            },
            ItemText {
                key: "Insertion Sort Module",
                label: "插入排序模塊",
                description: "觸發時將新的比賽時間與前10名記錄比較，插入更好的成績並將其他成績後移。",
            },
            ItemText {
                key: "Insertion Sort Unit",
                label: "插入排序單元",
                description: "緊湊的排序單元。儲存一個玩家的數據並處理比較邏輯以確定排名位置。",
            },
            ItemText {
                key: "Generated Box UI Reverse Loader",
                label: "生成盒子UI逆向裝載器",
                description: "手動觸發排行榜箱子的生成，將玩家物品按正確排名順序排列。",
            },
            ItemText {
                key: "Analog-7 Segment Display-Binary Converter",
                label: "模擬-七段顯示器-二進制轉換器",
                description: "將內部二進制信號轉換為七段顯示器可讀的模擬格式。",
            },
            ItemText {
                key: "26-Bit Serial Binary Box Transcoder",
                label: "26位串行二進制盒子編碼器",
                description: "將複雜的比賽數據編碼為串行二進制格式，用於跨維度或長距離可靠傳輸。",
            },
            ItemText {
                key: "26-Bit 4gt Serial Binary Box Decoder",
                label: "26位4gt串行二進制盒子解碼器",
                description: "以4遊戲刻速度將26位串行信號解碼回可用的並行數據。",
            },
            ItemText {
                key: "23-Bit Mini Time Display",
                label: "23位迷你時間顯示器",
                description: "比賽期間處理精確時間視覺化的緊湊顯示模塊。",
            },
            ItemText {
                key: "Nether Portal Chunk Loader",
                label: "地獄門區塊加載器",
                description: "通過地獄門保持紅石區塊加載，確保系統在玩家遠離時持續運行。",
            },
            ItemText {
                key: "10-item Simple Reverser",
                label: "10物品簡單逆序器",
                description: "用於逆序物品流的實用模塊，用於組織數據或重置系統狀態。",
            },
            ItemText {
                key: "Process Manager (Priority Queue Based)",
                label: "進程管理器（基於優先級隊列）",
                description: "通過隊列管理查詢、輸入和同步等任務來防止邏輯衝突，確保同時只運行一個任務。",
            },
            ItemText {
                key: "Modular Display Unit",
                label: "模塊化顯示單元",
                description: "主顯示器的獨立數字單元，設計為可堆疊且易於連接以實現多位數計時。",
            },
            ItemText {
                key: "Low-Latency Comparator Chain Unit",
                label: "低延遲比較器鏈單元",
                description: "使用比較器邏輯在垂直距離上即時傳輸模擬信號，繞過標準紅石延遲。",
            },
            ItemText {
                key: "Latency-Free Analog Downlink (BED Encoded)",
                label: "無延遲模擬下行（BED編碼）",
                description: "使用方塊事件延遲（BED）編碼向下即時發送信號，對「地獄顯示器」系統至關重要。",
            },
            ItemText {
                key: "Instant Item Catcher (Separates Boat and ID)",
                label: "即時物品捕捉器（分離船和ID）",
                description: "終點線機制。即時分離玩家的船和ID卡以觸發終點邏輯。",
            },
        ],
    },
    footer: FooterText {
        tagline: "原版Minecraft冰船競速體驗",
        copyright: "© 2024 冰寒追霜。保留所有權利。",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_tags_round_trip_to_translation_tables() {
        assert_eq!(Language::En.tag(), "en");
        assert_eq!(Language::Zh.tag(), "zh");
        assert_eq!(Language::En.text().nav.download, "Download");
        assert_eq!(Language::Zh.text().nav.download, "下載");
    }

    #[test]
    fn card_lookup_falls_back_to_the_raw_id() {
        let highlights = &EN.highlights;
        assert_eq!(highlights.card_title("track"), "Track");
        assert_eq!(highlights.card_title("unknown-card"), "unknown-card");
        assert_eq!(highlights.card_description("unknown-card"), "");
    }

    #[test]
    fn lookup_fallbacks_borrow_from_the_callers_key() {
        // Runtime-built keys: the fallback must hand back the caller's
        // borrow, not one tied to the static tables.
        let id = format!("missing-card-{}", 7);
        assert_eq!(EN.highlights.card_title(&id), id);

        let key = String::from("missing-item");
        assert_eq!(EN.redstone.item_label(&key), key);
    }

    #[test]
    fn every_english_redstone_item_has_a_chinese_entry() {
        for item in EN.redstone.items {
            assert!(
                ZH.redstone.items.iter().any(|zh| zh.key == item.key),
                "missing zh translation for {}",
                item.key
            );
        }
        assert_eq!(EN.redstone.items.len(), ZH.redstone.items.len());
    }

    #[test]
    fn tokenizer_splits_symbols_into_their_own_runs() {
        let parts = tokenize_label("3-bit Adder");
        assert_eq!(
            parts,
            vec![
                LabelPart::Text("3"),
                LabelPart::Symbol("-"),
                LabelPart::Text("bit Adder"),
            ]
        );

        let parts = tokenize_label("26-Bit 4gt Serial");
        assert!(parts.contains(&LabelPart::Symbol("4")));
        assert!(parts.contains(&LabelPart::Symbol("-")));
    }

    #[test]
    fn tokenizer_preserves_content_and_order() {
        for item in EN.redstone.items {
            let rebuilt: String = tokenize_label(item.label)
                .iter()
                .map(|part| match part {
                    LabelPart::Text(text) | LabelPart::Symbol(text) => *text,
                })
                .collect();
            assert_eq!(rebuilt, item.label);
        }
    }

    #[test]
    fn tokenizer_handles_labels_without_symbols() {
        assert_eq!(tokenize_label("Overview"), vec![LabelPart::Text("Overview")]);
        assert_eq!(tokenize_label(""), Vec::<LabelPart>::new());
    }

    #[test]
    fn tokenizer_handles_multibyte_text_around_symbols() {
        let parts = tokenize_label("三層計時器(移位)");
        let rebuilt: String = parts
            .iter()
            .map(|part| match part {
                LabelPart::Text(text) | LabelPart::Symbol(text) => *text,
            })
            .collect();
        assert_eq!(rebuilt, "三層計時器(移位)");
        assert!(parts.contains(&LabelPart::Symbol("(")));
    }
}
