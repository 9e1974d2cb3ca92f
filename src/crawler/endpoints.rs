//! Default endpoint list for the sequential crawler.
//!
//! Ordered, heterogeneous generic search endpoints: general web engines,
//! metasearchers, and video/audio/news verticals. The query text is
//! appended verbatim to each prefix. Walked strictly in this order.

pub const SEARCH_ENDPOINTS: &[&str] = &[
    "https://search.aol.com/aol/search?q=",
    "https://www.google.com/search?q=",
    "https://www.bing.com/search?q=",
    "https://search.yahoo.com/search?p=",
    "https://duckduckgo.com/?q=",
    "https://www.baidu.com/s?wd=",
    "https://www.yandex.com/search/?text=",
    "https://www.ask.com/web?q=",
    "https://www.aol.com/search?q=",
    "https://www.wolframalpha.com/input/?i=",
    "https://www.startpage.com/do/search?q=",
    "https://www.qwant.com/?q=",
    "https://www.searchencrypt.com/search?q=",
    "https://www.exalead.com/search/",
    "https://www.kiddle.co/",
    "https://www.yippy.com/search?query=",
    "https://www.dogpile.com/search/web?q=",
    "https://www.metacrawler.com/search/web?q=",
    "https://www.gigablast.com/search?q=",
    "https://www.lycos.com/search?q=",
    "https://www.webcrawler.com/search/web?q=",
    "https://www.info.com/search?q=",
    "https://www.teoma.com/search?q=",
    "https://www.bing.com/videos/search?q=",
    "https://www.vimeo.com/search?q=",
    "https://www.dailymotion.com/search?q=",
    "https://www.twitch.tv/search?term=",
    "https://www.tiktok.com/search?q=",
    "https://www.search.com/search?q=",
    "https://www.goo.gl/search?q=",
    "https://www.filehorse.com/search?q=",
    "https://www.searchenginewatch.com/?s=",
    "https://www.searchtempest.com/search?q=",
    "https://www.explore.com/search?q=",
    "https://www.searchresults.com/search?q=",
    "https://www.find.com/search?q=",
    "https://www.searchenginejournal.com/search?q=",
    "https://vimeo.com/search?q=",
    "https://www.facebook.com/watch/search/?q=",
    "https://www.veoh.com/search/videos?q=",
    "https://www.metacafe.com/search/videos?q=",
    "https://www.bitchute.com/search/?query=",
    "https://rumble.com/search/?query=",
    "https://soundcloud.com/search?q=",
    "https://open.spotify.com/search?q=",
    "https://music.apple.com/us/search?term=",
    "https://tidal.com/search?q=",
    "https://www.amazon.com/music/search?q=",
    "https://www.pandora.com/search?q=",
    "https://www.iheart.com/search?q=",
    "https://www.mixcloud.com/search?q=",
    "https://www.last.fm/search?q=",
    "https://www.beatport.com/search?q=",
    "https://www.buzzfeed.com/search?q=",
    "https://www.huffpost.com/search?q=",
    "https://www.cnn.com/search?q=",
    "https://www.vice.com/search?q=",
];
