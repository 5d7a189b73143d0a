//! Built-in library of log format examples, grouped by category.

use crate::types::TestRequest;

#[derive(Debug)]
pub struct PatternCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub patterns: &'static [PatternEntry],
}

/// A ready-to-run example: a named-capture regex, an optional time format
/// and a log line the pattern is known to match.
#[derive(Debug)]
pub struct PatternEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub pattern: &'static str,
    pub time_format: &'static str,
    pub sample: &'static str,
}

impl PatternEntry {
    // The remote API expects slash-delimited patterns; catalog entries
    // store them bare.
    pub fn to_request(&self) -> TestRequest {
        TestRequest {
            pattern: format!("/{}/", self.pattern),
            time_format: if self.time_format.is_empty() {
                None
            } else {
                Some(self.time_format.to_string())
            },
            sample: self.sample.to_string(),
        }
    }
}

pub fn categories() -> &'static [PatternCategory] {
    CATEGORIES
}

pub fn category(id: &str) -> Option<&'static PatternCategory> {
    CATEGORIES.iter().find(|category| category.id == id)
}

pub fn find(id: &str) -> Option<(&'static PatternCategory, &'static PatternEntry)> {
    CATEGORIES.iter().find_map(|category| {
        category
            .patterns
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| (category, entry))
    })
}

pub fn pattern_count() -> usize {
    CATEGORIES
        .iter()
        .map(|category| category.patterns.len())
        .sum()
}

static CATEGORIES: &[PatternCategory] = &[
    PatternCategory {
        id: "web-logs",
        name: "Web Logs",
        patterns: &[
            PatternEntry {
                id: "apache-common",
                name: "Apache Common Log",
                description: "Standard Apache access log format",
                pattern: r#"^(?<host>[^ ]*) [^ ]* (?<user>[^ ]*) \[(?<time>[^\]]*)\] "(?<method>\S+)(?: +(?<path>[^ ]*) +\S*)?" (?<code>[^ ]*) (?<size>[^ ]*)$"#,
                time_format: "%d/%b/%Y:%H:%M:%S %z",
                sample: r#"127.0.0.1 - frank [10/Oct/2000:13:55:36 -0700] "GET /apache_pb.gif HTTP/1.0" 200 2326"#,
            },
            PatternEntry {
                id: "apache-combined",
                name: "Apache Combined Log",
                description: "Apache access log with referer and user agent",
                pattern: r#"^(?<host>[^ ]*) [^ ]* (?<user>[^ ]*) \[(?<time>[^\]]*)\] "(?<method>\S+)(?: +(?<path>[^ ]*) +\S*)?" (?<code>[^ ]*) (?<size>[^ ]*)(?: "(?<referer>[^"]*)" "(?<agent>.*)")?$"#,
                time_format: "%d/%b/%Y:%H:%M:%S %z",
                sample: r#"127.0.0.1 - frank [10/Oct/2000:13:55:36 -0700] "GET /apache_pb.gif HTTP/1.0" 200 2326 "http://www.example.com/start.html" "Mozilla/4.08 [en] (Win98; I ;Nav)""#,
            },
            PatternEntry {
                id: "apache-error",
                name: "Apache Error Log",
                description: "Apache error log format",
                pattern: r#"^\[(?<time>[^\]]*)\] \[(?<level>[^\]]*)\] \[pid (?<pid>\d+)\] (?<message>.*)$"#,
                time_format: "",
                sample: r#"[Mon Oct 10 13:55:36.123456 2023] [core:error] [pid 12345] AH00126: Invalid URI in request GET /bad HTTP/1.0"#,
            },
            PatternEntry {
                id: "nginx-access",
                name: "Nginx Access Log",
                description: "Standard Nginx access log format",
                pattern: r#"^(?<remote>[^ ]*) (?<host>[^ ]*) (?<user>[^ ]*) \[(?<time>[^\]]*)\] "(?<method>\S+)(?: +(?<path>[^"]*?)(?: +\S*)?)?" (?<code>[^ ]*) (?<size>[^ ]*)(?: "(?<referer>[^"]*)" "(?<agent>[^"]*)")?$"#,
                time_format: "%d/%b/%Y:%H:%M:%S %z",
                sample: r#"192.168.1.1 example.com user [10/Oct/2000:13:55:36 -0700] "GET /index.html HTTP/1.1" 200 1234 "http://example.com" "Mozilla/5.0""#,
            },
            PatternEntry {
                id: "nginx-error",
                name: "Nginx Error Log",
                description: "Nginx error log format",
                pattern: r#"^(?<time>[^ ]+ [^ ]+) \[(?<level>[^\]]+)\] (?<pid>\d+)#(?<tid>\d+): (?<message>.*)$"#,
                time_format: "%Y/%m/%d %H:%M:%S",
                sample: r#"2023/10/10 13:55:36 [error] 1234#5678: *90 open() "/usr/share/nginx/html/missing.html" failed (2: No such file or directory)"#,
            },
            PatternEntry {
                id: "tomcat-access",
                name: "Tomcat Access Log",
                description: "Apache Tomcat access log format",
                pattern: r#"^(?<host>[^ ]*) - (?<user>[^ ]*) \[(?<time>[^\]]*)\] "(?<method>\S+) (?<path>[^ ]*) (?<protocol>[^"]*)" (?<code>\d+) (?<size>[^ ]*)$"#,
                time_format: "%d/%b/%Y:%H:%M:%S %z",
                sample: r#"10.0.0.7 - admin [10/Oct/2023:13:55:36 +0000] "POST /manager/html HTTP/1.1" 403 3420"#,
            },
            PatternEntry {
                id: "iis-log",
                name: "IIS Log",
                description: "Microsoft IIS web server log format",
                pattern: r#"^(?<date>\S+) (?<timestamp>\S+) (?<s_ip>\S+) (?<cs_method>\S+) (?<cs_uri_stem>\S+) (?<cs_uri_query>\S+) (?<s_port>\S+) (?<cs_username>\S+) (?<c_ip>\S+) (?<cs_user_agent>\S+) (?<sc_status>\S+) (?<sc_substatus>\S+) (?<sc_win32_status>\S+) (?<time_taken>\S+)$"#,
                time_format: "",
                sample: r#"2023-01-01 12:00:00 192.168.1.1 GET /default.htm - 80 - 10.0.0.1 Mozilla/5.0 200 0 0 1234"#,
            },
            PatternEntry {
                id: "haproxy",
                name: "HAProxy",
                description: "HAProxy load balancer log format",
                pattern: r#"^<(?<pri>\d+)>(?<time>[^ ]+ [^ ]+ [^ ]+) (?<hostname>[^ ]+) (?<process>[^\[]+)\[(?<pid>\d+)\]: (?<client_ip>[^:]+):(?<client_port>\d+) \[(?<accept_date>[^\]]+)\] (?<frontend_name>[^ ]+) (?<backend_name>[^ ]+) (?<status_code>\d+) (?<bytes_read>\d+) (?<request>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"<134>Oct 10 13:55:36 loadbalancer haproxy[1234]: 192.168.1.100:54321 [10/Oct/2000:13:55:36.123] frontend backend 200 1234 "GET /api/health HTTP/1.1""#,
            },
            PatternEntry {
                id: "squid-access",
                name: "Squid Access Log",
                description: "Squid proxy native access log",
                pattern: r#"^(?<time>[^ ]+) +(?<duration>\d+) (?<client>[^ ]+) (?<result>[^/]+)/(?<code>\d+) (?<size>\d+) (?<method>[^ ]+) (?<url>[^ ]+) (?<user>[^ ]+) (?<hierarchy>[^/]+)/(?<server>[^ ]+) (?<content_type>.*)$"#,
                time_format: "",
                sample: r#"1697032536.123    45 192.168.1.100 TCP_MISS/200 4321 GET http://example.com/index.html - HIER_DIRECT/203.0.113.1 text/html"#,
            },
            PatternEntry {
                id: "varnish-ncsa",
                name: "Varnish NCSA Log",
                description: "Varnish Cache NCSA-style access log",
                pattern: r#"^(?<host>[^ ]*) [^ ]* (?<user>[^ ]*) \[(?<time>[^\]]*)\] "(?<request>[^"]*)" (?<code>\d+) (?<size>[^ ]*) "(?<referer>[^"]*)" "(?<agent>[^"]*)"$"#,
                time_format: "%d/%b/%Y:%H:%M:%S %z",
                sample: r#"203.0.113.50 - - [10/Oct/2023:13:55:36 +0000] "GET http://example.com/img/logo.png HTTP/1.1" 200 5120 "http://example.com/" "Mozilla/5.0""#,
            },
            PatternEntry {
                id: "caddy-access",
                name: "Caddy Access Log",
                description: "Caddy structured JSON access log",
                pattern: r#"^(?<log>\{.*\})$"#,
                time_format: "",
                sample: r#"{"level":"info","ts":1697032536.123,"logger":"http.log.access","msg":"handled request","status":200,"size":1234}"#,
            },
        ],
    },
    PatternCategory {
        id: "cisco-network",
        name: "Cisco Network",
        patterns: &[
            PatternEntry {
                id: "cisco-asa",
                name: "Cisco ASA",
                description: "Cisco Adaptive Security Appliance logs",
                pattern: r#"^%ASA-(?<pri>\d+)-(?<id>\d+):\s+(?<message>.*)$"#,
                time_format: "%b %d %Y %H:%M:%S",
                sample: r#"%ASA-6-302013: Built inbound TCP connection 12345 for outside:192.168.1.100/1234 (192.168.1.100/1234) to inside:10.0.0.1/80 (10.0.0.1/80)"#,
            },
            PatternEntry {
                id: "cisco-ios",
                name: "Cisco IOS",
                description: "Cisco IOS router/switch logs",
                pattern: r#"^<(?<pri>\d+)>(?<seq>\d+): (?<timestamp>[^%]+): %(?<facility>[^-]+)-(?<severity>\d+)-(?<mnemonic>[^:]+): (?<message>.*)$"#,
                time_format: "",
                sample: r#"<189>123: Oct 10 13:55:36: %SYS-5-CONFIG_I: Configured from console by admin on vty0 (192.168.1.100)"#,
            },
            PatternEntry {
                id: "cisco-meraki",
                name: "Cisco Meraki",
                description: "Cisco Meraki cloud-managed device logs",
                pattern: r#"^<(?<pri>\d+)>(?<version>\d+) (?<timestamp>[^ ]+) (?<device_name>[^ ]+) (?<type>[^ ]+) (?<event_type>[^ ]+) (?<message>.*)$"#,
                time_format: "%Y-%m-%dT%H:%M:%SZ",
                sample: r#"<134>1 2023-01-01T12:00:00Z MX84 urls src=192.168.1.100 dst=example.com request: GET example.com/"#,
            },
            PatternEntry {
                id: "cisco-firepower",
                name: "Cisco Firepower",
                description: "Cisco Firepower Threat Defense logs",
                pattern: r#"^<(?<pri>\d+)>(?<time>[^ ]+ [^ ]+ [^ ]+) (?<hostname>[^ ]+) (?<program>[^:]+): (?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"<134>Oct 10 13:55:36 firepower SFIMS: [Primary Detection Engine (a8c4e3b2-1234-5678-9abc-def012345678)] Connection Type: Start, User: N/A"#,
            },
            PatternEntry {
                id: "cisco-ise",
                name: "Cisco ISE",
                description: "Cisco Identity Services Engine logs",
                pattern: r#"^<(?<pri>\d+)>(?<time>[^ ]+ [^ ]+ [^ ]+) (?<hostname>[^ ]+) (?<program>[^ ]+) (?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"<134>Oct 10 13:55:36 ise-server CISE_RADIUS_Accounting 0000123456 1 0 2023-01-01 12:00:00.123 +00:00 0000123456 5200 NOTICE"#,
            },
            PatternEntry {
                id: "cisco-nexus",
                name: "Cisco Nexus",
                description: "Cisco Nexus data center switch logs",
                pattern: r#"^<(?<pri>\d+)>(?<time>[^ ]+ [^ ]+ [^ ]+) (?<hostname>[^ ]+) %(?<facility>[^-]+)-(?<severity>[^-]+)-(?<mnemonic>[^:]+): (?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"<189>Oct 10 13:55:36 nexus-switch %ETHPORT-5-IF_UP: Interface Ethernet1/1 is up"#,
            },
            PatternEntry {
                id: "cisco-wlc",
                name: "Cisco WLC",
                description: "Cisco Wireless LAN Controller logs",
                pattern: r#"^<(?<pri>\d+)>(?<timestamp>[^\s]+\s+[^\s]+\s+[^\s]+) (?<hostname>[^\s]+) \*(?<log_time>[^%]+): %(?<facility>[^-]+)-(?<severity>\d+)-(?<mnemonic>[^:]+): (?<message>.*)$"#,
                time_format: "",
                sample: r#"<134>Oct 10 13:55:36 wlc-controller *Oct 10 13:55:36.123: %DOT11-6-ASSOC: Station associated"#,
            },
            PatternEntry {
                id: "cisco-umbrella",
                name: "Cisco Umbrella",
                description: "Cisco Umbrella DNS security logs",
                pattern: r#"^<(?<pri>\d+)>(?<time>[^ ]+ [^ ]+ [^ ]+) (?<hostname>[^ ]+) CEF:(?<version>[^|]+)\|(?<vendor>[^|]+)\|(?<product>[^|]+)\|(?<product_version>[^|]+)\|(?<event_id>[^|]+)\|(?<event_name>[^|]+)\|(?<severity>[^|]+)\|(?<extension>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"<134>Oct 10 13:55:36 umbrella CEF:0|Cisco|Umbrella|1.0|1|DNS Request Allowed|3|src=192.168.1.100 dst=8.8.8.8 dhost=example.com"#,
            },
        ],
    },
    PatternCategory {
        id: "security-appliances",
        name: "Security Appliances",
        patterns: &[
            PatternEntry {
                id: "palo-alto",
                name: "Palo Alto Networks",
                description: "Palo Alto Networks firewall logs",
                pattern: r#"^<(?<pri>\d+)>(?<timestamp>[^\s]+\s+[^\s]+\s+[^\s]+\s+[^\s]+) (?<hostname>[^\s]+) (?<program>[^:]+): (?<message>.*)$"#,
                time_format: "",
                sample: r#"<134>Oct 10 2023 13:55:36 pa-firewall TRAFFIC: Connection from 192.168.1.100 to 10.0.0.1"#,
            },
            PatternEntry {
                id: "fortinet-fortigate",
                name: "Fortinet FortiGate",
                description: "Fortinet FortiGate firewall logs",
                pattern: r#"^date=(?<fdate>[^ ]+)\s+time=(?<ftime>[^ ]+)\s+logid="(?<logid>[^"]+)"\s+type="(?<type>[^"]+)"\s+subtype="(?<subtype>[^"]+)"\s+(?<message>.*)$"#,
                time_format: "%Y-%m-%d %H:%M:%S",
                sample: r#"date=2023-01-01 time=12:00:00 logid="0000000013" type="traffic" subtype="forward" level="notice" vd="root" eventtime=1672574400 srcip=192.168.1.100 srcport=12345 srcintf="port1" dstip=8.8.8.8 dstport=53 dstintf="port2" policyid=1 sessionid=123456 proto=17 action="accept" policytype="policy" service="DNS" dstcountry="United States" srccountry="Reserved" trandisp="snat" transip=203.0.113.1 transport=12345 duration=1 sentbyte=64 rcvdbyte=80"#,
            },
            PatternEntry {
                id: "checkpoint",
                name: "Check Point",
                description: "Check Point firewall logs",
                pattern: r#"^<(?<pri>\d+)>(?<time>[^ ]+ [^ ]+ [^ ]+) (?<hostname>[^ ]+) (?<date>[^ ]+) (?<logtime>[^ ]+) (?<src_ip>[^ ]+) product: (?<product>[^;]+);\s*(?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"<134>Oct 10 13:55:36 checkpoint-gw 10Oct2023 13:55:36 192.168.1.1 product: VPN-1 & FireWall-1; Action="accept"; orig="192.168.1.100"; i/f_dir="inbound"; i/f_name="eth0"; has_accounting="0"; uuid="<12345678-1234-5678-9abc-def012345678>"; product="VPN-1 & FireWall-1"; __policy_id_tag="product=VPN-1 & FireWall-1[db_tag={ABCD1234-5678-90EF-GHIJ-KLMNOPQRSTUV};mgmt=checkpoint-mgmt;date=1697026536;policy_name=Standard]"; rule_name="Web_Access"; rule_uid="{12345678-1234-5678-9abc-def012345678}"; src="192.168.1.100"; dst="203.0.113.1"; proto="6"; service="80"; s_port="54321""#,
            },
            PatternEntry {
                id: "f5-bigip",
                name: "F5 BIG-IP",
                description: "F5 BIG-IP application delivery controller logs",
                pattern: r#"^<(?<pri>\d+)>(?<time>[^ ]+ [^ ]+ [^ ]+) (?<hostname>[^ ]+) (?<program>[^\[]+)\[(?<pid>\d+)\]: (?<msgid>[^:]+):\s*(?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"<134>Oct 10 13:55:36 bigip tmm[12345]: 01260013:4: SSL Handshake failed for TCP 192.168.1.100:54321 -> 10.0.0.1:443"#,
            },
            PatternEntry {
                id: "juniper-srx",
                name: "Juniper SRX",
                description: "Juniper SRX firewall logs",
                pattern: r#"^<(?<pri>\d+)>(?<time>[^ ]+ [^ ]+ [^ ]+ [^ ]+) (?<hostname>[^ ]+) (?<program>[^\[]+)\[(?<pid>\d+)\]: (?<event>[^:]+): (?<message>.*)$"#,
                time_format: "%b %d %Y %H:%M:%S",
                sample: r#"<134>Oct 10 2023 13:55:36 srx-firewall RT_FLOW[1234]: RT_FLOW_SESSION_CREATE: session created 192.168.1.100/54321->10.0.0.1/80 junos-http None 6 trust-to-untrust trust untrust 1234"#,
            },
            PatternEntry {
                id: "sophos-utm",
                name: "Sophos UTM",
                description: "Sophos Unified Threat Management logs",
                pattern: r#"^(?<time>[^ ]+ [^ ]+ [^ ]+ [^ ]+) (?<hostname>[^ ]+) (?<component>[^:]+): (?<message>.*)$"#,
                time_format: "%b %d %Y %H:%M:%S",
                sample: r#"Oct 10 2023 13:55:36 sophos-utm httpd: id="0299" severity="info" sys="SecureWeb" sub="http" name="web request blocked" action="blocked" method="GET" srcip="192.168.1.100" dstip="203.0.113.1" user="" ad_domain="" statuscode="403" cached="0" profile="REF_DefaultHTTPProfile" filteraction="REF_DefaultHTTPCFFAction" size="1234" request="0x12345678" url="http://example.com/blocked" referer="" error="" authtime="0" dnstime="1" cattime="12" avscantime="0" fullreqtime="123" device="0" auth="0" ua="Mozilla/5.0" exceptions="""#,
            },
            PatternEntry {
                id: "pfsense-filterlog",
                name: "pfSense Filter Log",
                description: "pfSense firewall filter log",
                pattern: r#"^(?<time>[^ ]+ [^ ]+ [^ ]+) (?<hostname>[^ ]+) filterlog\[(?<pid>\d+)\]: (?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"Oct 10 13:55:36 pfsense filterlog[12345]: 5,,,1000000103,igb0,match,block,in,4,0x0,,64,12345,0,none,6,tcp,60,192.168.1.100,203.0.113.1,54321,443,0"#,
            },
            PatternEntry {
                id: "watchguard-firebox",
                name: "WatchGuard Firebox",
                description: "WatchGuard Firebox security appliance logs",
                pattern: r#"^(?<time>[^ ]+ [^ ]+ [^ ]+) (?<hostname>[^ ]+) (?<program>[^\[]+)\[(?<pid>\d+)\]: msg_id="(?<msg_id>[^"]+)" (?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"Oct 10 13:55:36 firebox firewall[1234]: msg_id="3000-0148" Allow 1-Trusted 0-External tcp 192.168.1.100 203.0.113.1 54321 443"#,
            },
        ],
    },
    PatternCategory {
        id: "system-logs",
        name: "System Logs",
        patterns: &[
            PatternEntry {
                id: "syslog",
                name: "Standard Syslog",
                description: "RFC3164 syslog format",
                pattern: r#"^(?<time>[^ ]* [^ ]* [^ ]*) (?<host>[^ ]*) (?<ident>[a-zA-Z0-9_\/\.\-]*)(?:\[(?<pid>[0-9]+)\])?(?:[^\:]*\:)? *(?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"Oct 10 13:55:36 myhost sshd[1234]: Failed password for invalid user admin from 192.168.1.100 port 22 ssh2"#,
            },
            PatternEntry {
                id: "syslog-rfc5424",
                name: "Syslog RFC5424",
                description: "RFC5424 structured syslog format",
                pattern: r#"^<(?<pri>\d+)>(?<version>\d+) (?<time>[^ ]+) (?<host>[^ ]+) (?<ident>[^ ]+) (?<pid>[^ ]+) (?<msgid>[^ ]+) (?<extradata>(\[(.*?)\]|-)) (?<message>.+)$"#,
                time_format: "%Y-%m-%dT%H:%M:%S",
                sample: r#"<34>1 2023-10-10T13:55:36.123Z myhost su 1234 ID47 - 'su root' failed for user on /dev/pts/8"#,
            },
            PatternEntry {
                id: "auth-log",
                name: "Auth.log",
                description: "Linux authentication log format",
                pattern: r#"^(?<time>[^ ]* [^ ]* [^ ]*) (?<host>[^ ]*) (?<service>[^\[]*)(\[(?<pid>[0-9]+)\])?: (?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"Oct 10 13:55:36 server sudo[12345]: user : TTY=pts/0 ; PWD=/home/user ; USER=root ; COMMAND=/bin/ls"#,
            },
            PatternEntry {
                id: "kern-log",
                name: "Kernel Log",
                description: "Linux kernel log format",
                pattern: r#"^(?<time>[^ ]* [^ ]* [^ ]*) (?<host>[^ ]*) kernel: \[(?<timestamp>[^\]]+)\] (?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"Oct 10 13:55:36 server kernel: [12345.678901] USB disconnect, address 1"#,
            },
            PatternEntry {
                id: "cron-log",
                name: "Cron Log",
                description: "Cron job execution log format",
                pattern: r#"^(?<time>[^ ]* [^ ]* [^ ]*) (?<host>[^ ]*) CRON\[(?<pid>\d+)\]: \((?<user>[^)]+)\) CMD \((?<command>.*)\)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"Oct 10 13:55:01 server CRON[28483]: (root) CMD (command -v debian-sa1 > /dev/null && debian-sa1 1 1)"#,
            },
            PatternEntry {
                id: "dmesg",
                name: "Kernel Ring Buffer",
                description: "Kernel ring buffer output",
                pattern: r#"^\[(?<timestamp>[^\]]+)\] (?<message>.*)$"#,
                time_format: "",
                sample: r#"[12345.678901] usb 1-1: new high-speed USB device number 2 using xhci_hcd"#,
            },
            PatternEntry {
                id: "systemd-journal",
                name: "systemd Journal",
                description: "systemd service messages via syslog",
                pattern: r#"^(?<time>[^ ]* [^ ]* [^ ]*) (?<host>[^ ]*) systemd\[(?<pid>\d+)\]: (?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"Oct 10 13:55:36 server systemd[1]: Started Daily apt download activities."#,
            },
            PatternEntry {
                id: "audit-log",
                name: "Linux Audit Log",
                description: "Linux audit daemon log format",
                pattern: r#"^type=(?<type>[^ ]+) msg=audit\((?<timestamp>[^)]+)\): (?<message>.*)$"#,
                time_format: "",
                sample: r#"type=SYSCALL msg=audit(1697032536.123:456): arch=c000003e syscall=59 success=yes exit=0 a0=55f5e0 comm="ls" exe="/bin/ls""#,
            },
            PatternEntry {
                id: "ufw-log",
                name: "UFW Firewall Log",
                description: "Uncomplicated Firewall kernel log format",
                pattern: r#"^(?<time>[^ ]* [^ ]* [^ ]*) (?<host>[^ ]*) kernel: \[(?<timestamp>[^\]]+)\] \[UFW (?<action>[^\]]+)\] (?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"Oct 10 13:55:36 server kernel: [12345.678901] [UFW BLOCK] IN=eth0 OUT= MAC=00:11:22:33:44:55 SRC=203.0.113.1 DST=192.168.1.100 PROTO=TCP SPT=54321 DPT=22"#,
            },
            PatternEntry {
                id: "windows-event",
                name: "Windows Event Log",
                description: "Microsoft Windows Event Log format",
                pattern: r#"^<(?<pri>\d+)>(?<time>[^ ]+ [^ ]+ [^ ]+) (?<hostname>[^ ]+) MSWinEventLog\t(?<log_level>\d+)\t(?<log_source>[^\t]+)\t(?<event_id>\d+)\t(?<date>[^\t]+)\t(?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: "<134>Oct 10 13:55:36 windows-server MSWinEventLog\t1\tSecurity\t4624\tOct 10 2023 13:55:36\tAn account was successfully logged on.",
            },
        ],
    },
    PatternCategory {
        id: "application-logs",
        name: "Application Logs",
        patterns: &[
            PatternEntry {
                id: "json-log",
                name: "JSON Structured",
                description: "Structured JSON application logs",
                pattern: r#"^(?<log>.*)$"#,
                time_format: "",
                sample: r#"{"timestamp":"2023-01-01T12:00:00Z","level":"INFO","message":"Application started","service":"web-server","request_id":"abc123"}"#,
            },
            PatternEntry {
                id: "logfmt",
                name: "Logfmt",
                description: "Key-value logfmt application logs",
                pattern: r#"^time=(?<time>[^ ]+) level=(?<level>[^ ]+) msg="(?<msg>[^"]*)"(?<rest>.*)$"#,
                time_format: "",
                sample: r#"time=2023-10-10T13:55:36Z level=info msg="request completed" method=GET path=/healthz status=200 duration=1.2ms"#,
            },
            PatternEntry {
                id: "docker-log",
                name: "Docker Container",
                description: "Docker container log format",
                pattern: r#"^(?<time>[^ ]+) (?<container_id>[^ ]+) (?<container_name>[^ ]+): (?<message>.*)$"#,
                time_format: "%Y-%m-%dT%H:%M:%S",
                sample: r#"2023-01-01T12:00:00.123456Z a1b2c3d4e5f6 web-server: Starting application on port 8080"#,
            },
            PatternEntry {
                id: "k8s-log",
                name: "Kubernetes Pod",
                description: "Kubernetes pod log format",
                pattern: r#"^(?<time>[^ ]+) (?<stream>[^ ]+) (?<log_type>[^ ]+) (?<message>.*)$"#,
                time_format: "%Y-%m-%dT%H:%M:%S",
                sample: r#"2023-01-01T12:00:00.123456Z stdout F {"level":"info","msg":"Server started","port":8080}"#,
            },
            PatternEntry {
                id: "log4j",
                name: "Log4j",
                description: "Log4j default pattern layout",
                pattern: r#"^(?<time>[^ ]+ [^ ]+) \[(?<thread>[^\]]+)\] (?<level>[A-Z]+) +(?<logger>[^ ]+) - (?<message>.*)$"#,
                time_format: "%Y-%m-%d %H:%M:%S",
                sample: r#"2023-10-10 13:55:36,123 [main] INFO  com.example.Application - Application started in 3.214 seconds"#,
            },
            PatternEntry {
                id: "python-logging",
                name: "Python Logging",
                description: "Python logging default format",
                pattern: r#"^(?<time>[^ ]+ [^ ]+) - (?<name>[^ ]+) - (?<level>[A-Z]+) - (?<message>.*)$"#,
                time_format: "%Y-%m-%d %H:%M:%S",
                sample: r#"2023-10-10 13:55:36,123 - myapp.views - ERROR - Unhandled exception in request handler"#,
            },
            PatternEntry {
                id: "rails-log",
                name: "Ruby on Rails",
                description: "Ruby on Rails application log format",
                pattern: r#"^(?<severity>[A-Z]), \[(?<time>[^ ]+) #(?<pid>\d+)\] +(?<level>[A-Z]+) -- (?<progname>[^:]*): (?<message>.*)$"#,
                time_format: "",
                sample: r#"I, [2023-10-10T13:55:36.123456 #1234]  INFO -- : Completed 200 OK in 15ms (Views: 8.1ms | ActiveRecord: 2.3ms)"#,
            },
            PatternEntry {
                id: "golang-glog",
                name: "Go glog",
                description: "Google glog format used by Go services",
                pattern: r#"^(?<level>[IWEF])(?<time>\d{4} [^ ]+) +(?<pid>\d+) (?<file>[^:]+):(?<line>\d+)\] (?<message>.*)$"#,
                time_format: "",
                sample: r#"I1010 13:55:36.123456   12345 server.go:142] Serving on port 8080"#,
            },
            PatternEntry {
                id: "spring-boot",
                name: "Spring Boot",
                description: "Spring Boot default console log format",
                pattern: r#"^(?<time>[^ ]+) +(?<level>[A-Z]+) (?<pid>\d+) --- \[(?<thread>[^\]]*)\] (?<logger>[^ ]+) *: (?<message>.*)$"#,
                time_format: "%Y-%m-%dT%H:%M:%S",
                sample: r#"2023-10-10T13:55:36.123Z  INFO 1234 --- [           main] com.example.DemoApplication              : Started DemoApplication in 2.456 seconds"#,
            },
            PatternEntry {
                id: "envoy-access",
                name: "Envoy Access Log",
                description: "Envoy proxy default access log format",
                pattern: r#"^\[(?<time>[^\]]+)\] "(?<request>[^"]*)" (?<response_code>\d+) (?<response_flags>[^ ]+) (?<bytes_received>\d+) (?<bytes_sent>\d+) (?<duration>\d+) (?<upstream_time>[^ ]+) "(?<forwarded_for>[^"]*)" "(?<agent>[^"]*)" "(?<request_id>[^"]*)" "(?<authority>[^"]*)" "(?<upstream_host>[^"]*)"$"#,
                time_format: "",
                sample: r#"[2023-10-10T13:55:36.123Z] "GET /api/v1/status HTTP/2" 200 - 0 542 12 11 "10.0.0.1" "curl/8.1.2" "f4b7cdb2-1234-5678-9abc-def012345678" "api.example.com" "10.0.0.12:8080""#,
            },
            PatternEntry {
                id: "php-fpm",
                name: "PHP-FPM",
                description: "PHP-FPM master process log format",
                pattern: r#"^\[(?<time>[^\]]+)\] (?<level>[A-Z]+): (?<message>.*)$"#,
                time_format: "%d-%b-%Y %H:%M:%S",
                sample: r#"[10-Oct-2023 13:55:36] NOTICE: fpm is running, pid 1234"#,
            },
            PatternEntry {
                id: "splunk",
                name: "Splunk",
                description: "Splunk Enterprise logs",
                pattern: r#"^<(?<pri>\d+)>(?<time>[^ ]+ [^ ]+ [^ ]+) (?<hostname>[^ ]+) (?<process>[^:]+): (?<component>[^ ]+) - - \[(?<req_time>[^\]]+)\] "(?<request>[^"]*)" (?<status>\d+) (?<bytes>\d+) - - - (?<duration>\d+)ms$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"<134>Oct 10 13:55:36 splunk-server splunkd: HttpListener - - [10/Oct/2023:13:55:36.123 +0000] "GET /services/server/info HTTP/1.1" 200 1234 - - - 45ms"#,
            },
        ],
    },
    PatternCategory {
        id: "database-logs",
        name: "Database Logs",
        patterns: &[
            PatternEntry {
                id: "mysql-error",
                name: "MySQL Error Log",
                description: "MySQL database error log format",
                pattern: r#"^(?<time>[^ ]* [^ ]*) (?<thread_id>[^ ]*) \[(?<level>[^\]]+)\] (?<message>.*)$"#,
                time_format: "%Y-%m-%d %H:%M:%S",
                sample: r#"2023-01-01 12:00:00 123 [ERROR] Access denied for user 'root'@'localhost' (using password: YES)"#,
            },
            PatternEntry {
                id: "mysql-slow-query",
                name: "MySQL Slow Query Log",
                description: "MySQL slow query log summary line",
                pattern: r#"^# Query_time: (?<query_time>[\d.]+) +Lock_time: (?<lock_time>[\d.]+) +Rows_sent: (?<rows_sent>\d+) +Rows_examined: (?<rows_examined>\d+)$"#,
                time_format: "",
                sample: r#"# Query_time: 2.000124  Lock_time: 0.000056 Rows_sent: 1  Rows_examined: 100000"#,
            },
            PatternEntry {
                id: "postgresql-log",
                name: "PostgreSQL Log",
                description: "PostgreSQL database log format",
                pattern: r#"^(?<time>[^ ]* [^ ]*) \[(?<pid>[0-9]+)\] (?<level>[^:]*): (?<message>.*)$"#,
                time_format: "%Y-%m-%d %H:%M:%S",
                sample: r#"2023-01-01 12:00:00 [1234] ERROR: relation "users" does not exist at character 15"#,
            },
            PatternEntry {
                id: "mongodb-log",
                name: "MongoDB Log",
                description: "MongoDB database log format",
                pattern: r#"^(?<time>[^ ]+) (?<severity>[^ ]+) (?<component>[^ ]+) \[(?<context>[^\]]+)\] (?<message>.*)$"#,
                time_format: "%Y-%m-%dT%H:%M:%S",
                sample: r#"2023-01-01T12:00:00.123+0000 I NETWORK [listener] connection accepted from 127.0.0.1:54321 #1 (1 connection now open)"#,
            },
            PatternEntry {
                id: "redis-log",
                name: "Redis Log",
                description: "Redis server log format",
                pattern: r#"^(?<pid>\d+):(?<role>[A-Z]) (?<day>\d+) (?<month>[A-Za-z]+) (?<year>\d+) (?<time>[^ ]+) (?<level>[*#.-]) (?<message>.*)$"#,
                time_format: "",
                sample: r#"1234:M 10 Oct 2023 13:55:36.123 * Ready to accept connections"#,
            },
            PatternEntry {
                id: "elasticsearch-log",
                name: "Elasticsearch Log",
                description: "Elasticsearch server log format",
                pattern: r#"^\[(?<time>[^\]]+)\]\[(?<level>[^\] ]+)\s*\]\[(?<component>[^\] ]+)\s*\] \[(?<node>[^\]]+)\] (?<message>.*)$"#,
                time_format: "",
                sample: r#"[2023-10-10T13:55:36,123][INFO ][o.e.n.Node               ] [node-1] started"#,
            },
            PatternEntry {
                id: "cassandra-log",
                name: "Cassandra Log",
                description: "Apache Cassandra system log format",
                pattern: r#"^(?<level>[A-Z]+) +\[(?<thread>[^\]]+)\] (?<time>[^ ]+ [^ ]+) (?<file>[^:]+):(?<line>\d+) - (?<message>.*)$"#,
                time_format: "%Y-%m-%d %H:%M:%S",
                sample: r#"INFO  [main] 2023-10-10 13:55:36,123 CassandraDaemon.java:650 - Startup complete"#,
            },
            PatternEntry {
                id: "influxdb-log",
                name: "InfluxDB Log",
                description: "InfluxDB logfmt-style server log",
                pattern: r#"^ts=(?<time>[^ ]+) lvl=(?<level>[^ ]+) msg="(?<msg>[^"]*)"(?<rest>.*)$"#,
                time_format: "",
                sample: r#"ts=2023-10-10T13:55:36.123456Z lvl=info msg="InfluxDB starting" log_id=0gc~lQ0l000 version=1.8.10"#,
            },
            PatternEntry {
                id: "couchdb-log",
                name: "CouchDB Log",
                description: "Apache CouchDB server log format",
                pattern: r#"^\[(?<level>[^\]]+)\] (?<time>[^ ]+) (?<node>[^ ]+) <(?<pid>[^>]+)> (?<id>[^ ]+) (?<message>.*)$"#,
                time_format: "",
                sample: r#"[notice] 2023-10-10T13:55:36.123456Z couchdb@127.0.0.1 <0.209.0> -------- 127.0.0.1:5984 GET / 200 ok 1"#,
            },
            PatternEntry {
                id: "mssql-errorlog",
                name: "SQL Server Error Log",
                description: "Microsoft SQL Server error log format",
                pattern: r#"^(?<time>[^ ]+ [^ ]+) (?<source>[^ ]+) +(?<message>.*)$"#,
                time_format: "%Y-%m-%d %H:%M:%S",
                sample: r#"2023-10-10 13:55:36.12 Server      Microsoft SQL Server 2019 (RTM) - 15.0.2000.5 (X64)"#,
            },
        ],
    },
    PatternCategory {
        id: "mail-logs",
        name: "Mail Servers",
        patterns: &[
            PatternEntry {
                id: "postfix-smtp",
                name: "Postfix SMTP",
                description: "Postfix SMTP delivery log format",
                pattern: r#"^(?<time>[^ ]* [^ ]* [^ ]*) (?<host>[^ ]*) postfix/(?<process>[^\[]+)\[(?<pid>\d+)\]: (?<queue_id>[A-F0-9]+): (?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"Oct 10 13:55:36 mail postfix/smtp[1234]: 4AB12C3D45: to=<user@example.com>, relay=mx.example.com[203.0.113.1]:25, delay=0.5, status=sent (250 2.0.0 OK)"#,
            },
            PatternEntry {
                id: "sendmail",
                name: "Sendmail",
                description: "Sendmail mail transfer agent logs",
                pattern: r#"^(?<time>[^ ]* [^ ]* [^ ]*) (?<host>[^ ]*) sendmail\[(?<pid>\d+)\]: (?<queue_id>[^:]+): (?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"Oct 10 13:55:36 mail sendmail[1234]: 39ADxyz012345: from=<sender@example.com>, size=2326, class=0, nrcpts=1"#,
            },
            PatternEntry {
                id: "exim-mainlog",
                name: "Exim Main Log",
                description: "Exim main log delivery format",
                pattern: r#"^(?<time>[^ ]+ [^ ]+) (?<id>[a-zA-Z0-9-]+) (?<flag><=|=>|->|\*\*|==) (?<address>[^ ]+) (?<message>.*)$"#,
                time_format: "%Y-%m-%d %H:%M:%S",
                sample: r#"2023-10-10 13:55:36 1qGxyz-000Abc-De <= sender@example.com H=mail.example.com [203.0.113.1] P=esmtp S=2326"#,
            },
            PatternEntry {
                id: "dovecot",
                name: "Dovecot",
                description: "Dovecot IMAP/POP3 server logs",
                pattern: r#"^(?<time>[^ ]* [^ ]* [^ ]*) (?<host>[^ ]*) dovecot: (?<service>[^:]+): (?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"Oct 10 13:55:36 mail dovecot: imap-login: Login: user=<frank>, method=PLAIN, rip=192.168.1.100, lip=10.0.0.5, TLS"#,
            },
            PatternEntry {
                id: "spamassassin",
                name: "SpamAssassin",
                description: "SpamAssassin spamd result log format",
                pattern: r#"^(?<time>[^ ]* [^ ]* [^ ]*) (?<host>[^ ]*) spamd\[(?<pid>\d+)\]: spamd: (?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"Oct 10 13:55:36 mail spamd[1234]: spamd: result: . 2 - DKIM_SIGNED,DKIM_VALID scantime=0.5,size=2326,user=frank"#,
            },
            PatternEntry {
                id: "opendkim",
                name: "OpenDKIM",
                description: "OpenDKIM signing and verification logs",
                pattern: r#"^(?<time>[^ ]* [^ ]* [^ ]*) (?<host>[^ ]*) opendkim\[(?<pid>\d+)\]: (?<queue_id>[^:]+): (?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"Oct 10 13:55:36 mail opendkim[1234]: 4AB12C3D45: DKIM-Signature field added (s=default, d=example.com)"#,
            },
        ],
    },
    PatternCategory {
        id: "message-queues",
        name: "Message Queues",
        patterns: &[
            PatternEntry {
                id: "kafka-server",
                name: "Kafka Broker",
                description: "Apache Kafka broker log format",
                pattern: r#"^\[(?<time>[^\]]+)\] (?<level>[A-Z]+) (?<message>.*) \((?<logger>[^)]+)\)$"#,
                time_format: "",
                sample: r#"[2023-10-10 13:55:36,123] INFO [KafkaServer id=0] started (kafka.server.KafkaServer)"#,
            },
            PatternEntry {
                id: "rabbitmq",
                name: "RabbitMQ",
                description: "RabbitMQ broker log format",
                pattern: r#"^(?<time>[^ ]+ [^ ]+) \[(?<level>[^\]]+)\] <(?<pid>[^>]+)> (?<message>.*)$"#,
                time_format: "%Y-%m-%d %H:%M:%S",
                sample: r#"2023-10-10 13:55:36.123 [info] <0.456.0> accepting AMQP connection <0.456.0> (192.168.1.100:54321 -> 10.0.0.5:5672)"#,
            },
            PatternEntry {
                id: "activemq",
                name: "ActiveMQ",
                description: "Apache ActiveMQ broker log format",
                pattern: r#"^(?<time>[^ ]+ [^ ]+) \| (?<level>[A-Z]+) +\| (?<message>.*) \| (?<logger>[^|]+) \| (?<thread>[^|]+)$"#,
                time_format: "",
                sample: r#"2023-10-10 13:55:36,123 | INFO  | Apache ActiveMQ 5.17.0 (localhost) started | org.apache.activemq.broker.BrokerService | main"#,
            },
            PatternEntry {
                id: "nats",
                name: "NATS Server",
                description: "NATS server log format",
                pattern: r#"^\[(?<pid>\d+)\] (?<time>[^ ]+ [^ ]+) \[(?<level>[A-Z]+)\] (?<message>.*)$"#,
                time_format: "%Y/%m/%d %H:%M:%S",
                sample: r#"[1234] 2023/10/10 13:55:36.123456 [INF] Server is ready"#,
            },
            PatternEntry {
                id: "mosquitto",
                name: "Mosquitto",
                description: "Eclipse Mosquitto MQTT broker logs",
                pattern: r#"^(?<timestamp>\d+): (?<message>.*)$"#,
                time_format: "",
                sample: r#"1697032536: New connection from 192.168.1.100:54321 on port 1883."#,
            },
            PatternEntry {
                id: "zookeeper",
                name: "ZooKeeper",
                description: "Apache ZooKeeper server log format",
                pattern: r#"^(?<time>[^ ]+ [^ ]+) \[myid:(?<myid>\d*)\] - (?<level>[A-Z]+) +\[(?<thread>[^\]]+)\] - (?<message>.*)$"#,
                time_format: "",
                sample: r#"2023-10-10 13:55:36,123 [myid:1] - INFO  [main:QuorumPeerMain@151] - Starting quorum peer"#,
            },
        ],
    },
    PatternCategory {
        id: "cloud-services",
        name: "Cloud Services",
        patterns: &[
            PatternEntry {
                id: "aws-elb",
                name: "AWS Classic ELB",
                description: "AWS Classic Load Balancer access log",
                pattern: r#"^(?<time>[^ ]+) (?<elb>[^ ]+) (?<client>[^ ]+):(?<client_port>\d+) (?<backend>[^ ]+):(?<backend_port>\d+) (?<request_processing_time>[^ ]+) (?<backend_processing_time>[^ ]+) (?<response_processing_time>[^ ]+) (?<elb_status_code>\d+) (?<backend_status_code>\d+) (?<received_bytes>\d+) (?<sent_bytes>\d+) "(?<request>[^"]*)"$"#,
                time_format: "",
                sample: r#"2023-10-10T13:55:36.123456Z my-loadbalancer 192.168.1.100:54321 10.0.0.1:80 0.000073 0.001048 0.000057 200 200 0 29 "GET http://example.com:80/ HTTP/1.1""#,
            },
            PatternEntry {
                id: "aws-alb",
                name: "AWS ALB",
                description: "AWS Application Load Balancer access log",
                pattern: r#"^(?<type>[^ ]+) (?<time>[^ ]+) (?<elb>[^ ]+) (?<client>[^ ]+) (?<target>[^ ]+) (?<request_processing_time>[^ ]+) (?<target_processing_time>[^ ]+) (?<response_processing_time>[^ ]+) (?<elb_status_code>[^ ]+) (?<target_status_code>[^ ]+) (?<received_bytes>\d+) (?<sent_bytes>\d+) "(?<request>[^"]*)" "(?<user_agent>[^"]*)" (?<rest>.*)$"#,
                time_format: "",
                sample: r#"http 2023-10-10T13:55:36.123456Z app/my-alb/50dc6c495c0c9188 192.168.1.100:54321 10.0.0.1:80 0.000 0.001 0.000 200 200 34 366 "GET http://example.com:80/ HTTP/1.1" "curl/8.1.2" - -"#,
            },
            PatternEntry {
                id: "aws-s3-access",
                name: "AWS S3 Access Log",
                description: "Amazon S3 server access log format",
                pattern: r#"^(?<bucket_owner>[^ ]+) (?<bucket>[^ ]+) \[(?<time>[^\]]+)\] (?<remote_ip>[^ ]+) (?<requester>[^ ]+) (?<request_id>[^ ]+) (?<operation>[^ ]+) (?<key>[^ ]+) "(?<request_uri>[^"]*)" (?<http_status>\d+) (?<error_code>[^ ]+) (?<bytes_sent>[^ ]+) (?<object_size>[^ ]+) (?<total_time>[^ ]+) (?<turn_around_time>[^ ]+) "(?<referer>[^"]*)" "(?<user_agent>[^"]*)"$"#,
                time_format: "%d/%b/%Y:%H:%M:%S %z",
                sample: r#"79a59df900b949e5 awsexamplebucket1 [06/Feb/2019:00:00:38 +0000] 192.0.2.3 79a59df900b949e5 3E57427F3EXAMPLE REST.GET.VERSIONING - "GET /awsexamplebucket1?versioning HTTP/1.1" 200 - 113 - 7 - "-" "S3Console/0.4""#,
            },
            PatternEntry {
                id: "aws-vpc-flow",
                name: "AWS VPC Flow Log",
                description: "AWS VPC Flow Logs default format",
                pattern: r#"^(?<version>\d+) (?<account_id>[^ ]+) (?<interface_id>[^ ]+) (?<srcaddr>[^ ]+) (?<dstaddr>[^ ]+) (?<srcport>[^ ]+) (?<dstport>[^ ]+) (?<protocol>[^ ]+) (?<packets>[^ ]+) (?<bytes>[^ ]+) (?<start>\d+) (?<end>\d+) (?<action>[^ ]+) (?<log_status>[^ ]+)$"#,
                time_format: "",
                sample: r#"2 123456789010 eni-1235b8ca123456789 172.31.16.139 172.31.16.21 20641 22 6 20 4249 1418530010 1418530070 ACCEPT OK"#,
            },
            PatternEntry {
                id: "cloudfront",
                name: "CloudFront Access Log",
                description: "Amazon CloudFront access log format",
                pattern: r#"^(?<date>[^\t]+)\t(?<time>[^\t]+)\t(?<edge_location>[^\t]+)\t(?<bytes>[^\t]+)\t(?<client_ip>[^\t]+)\t(?<method>[^\t]+)\t(?<host>[^\t]+)\t(?<uri>[^\t]+)\t(?<status>[^\t]+)\t(?<referer>[^\t]+)\t(?<agent>[^\t]+)$"#,
                time_format: "",
                sample: "2023-10-10\t13:55:36\tIAD89-C1\t2326\t192.168.1.100\tGET\td111111abcdef8.cloudfront.net\t/index.html\t200\t-\tMozilla/5.0",
            },
            PatternEntry {
                id: "heroku-router",
                name: "Heroku Router",
                description: "Heroku router log format",
                pattern: r#"^(?<time>[^ ]+) (?<source>[^ ]+)\[(?<process>[^\]]+)\]: at=(?<at>[^ ]+) method=(?<method>[^ ]+) path="(?<path>[^"]*)" host=(?<host>[^ ]+) request_id=(?<request_id>[^ ]+) fwd="(?<fwd>[^"]*)" dyno=(?<dyno_name>[^ ]+) connect=(?<connect>[^ ]+) service=(?<service>[^ ]+) status=(?<status>\d+) bytes=(?<bytes>\d+)(?<rest>.*)$"#,
                time_format: "",
                sample: r#"2023-10-10T13:55:36.123456+00:00 heroku[router]: at=info method=GET path="/api/users" host=myapp.herokuapp.com request_id=8601b555-6a83-4c12-8269-97c8e32cdb22 fwd="203.0.113.1" dyno=web.1 connect=1ms service=18ms status=200 bytes=1548"#,
            },
        ],
    },
    PatternCategory {
        id: "monitoring-tools",
        name: "Monitoring Tools",
        patterns: &[
            PatternEntry {
                id: "prometheus",
                name: "Prometheus",
                description: "Prometheus server logfmt format",
                pattern: r#"^level=(?<level>[^ ]+) ts=(?<time>[^ ]+) caller=(?<caller>[^ ]+) msg="(?<msg>[^"]*)"(?<rest>.*)$"#,
                time_format: "",
                sample: r#"level=info ts=2023-10-10T13:55:36.123Z caller=main.go:539 msg="Server is ready to receive web requests.""#,
            },
            PatternEntry {
                id: "grafana",
                name: "Grafana",
                description: "Grafana server log format",
                pattern: r#"^t=(?<time>[^ ]+) lvl=(?<level>[^ ]+) msg="(?<msg>[^"]*)"(?<rest>.*)$"#,
                time_format: "",
                sample: r#"t=2023-10-10T13:55:36+0000 lvl=info msg="HTTP Server Listen" logger=http.server address=[::]:3000 protocol=http"#,
            },
            PatternEntry {
                id: "nagios",
                name: "Nagios",
                description: "Nagios Core monitoring log format",
                pattern: r#"^\[(?<timestamp>\d+)\] (?<type>[^:]+): (?<message>.*)$"#,
                time_format: "",
                sample: r#"[1697032536] SERVICE ALERT: web01;HTTP;CRITICAL;SOFT;1;CRITICAL - Socket timeout after 10 seconds"#,
            },
            PatternEntry {
                id: "zabbix",
                name: "Zabbix",
                description: "Zabbix server log format",
                pattern: r#"^ *(?<pid>\d+):(?<time>[^ ]+) +(?<message>.*)$"#,
                time_format: "",
                sample: r#"  1234:20231010:135536.123 Starting Zabbix Server. Zabbix 6.4.0 (revision 12345)"#,
            },
            PatternEntry {
                id: "consul",
                name: "Consul",
                description: "HashiCorp Consul agent log format",
                pattern: r#"^(?<time>[^ ]+) \[(?<level>[A-Z]+)\] +(?<component>[^:]+): (?<message>.*)$"#,
                time_format: "",
                sample: r#"2023-10-10T13:55:36.123Z [INFO]  agent.server: Consul agent running!"#,
            },
            PatternEntry {
                id: "vault",
                name: "Vault",
                description: "HashiCorp Vault server log format",
                pattern: r#"^(?<time>[^ ]+) \[(?<level>[A-Z]+)\] +(?<module>[^:]+): (?<message>.*)$"#,
                time_format: "",
                sample: r#"2023-10-10T13:55:36.123Z [INFO]  core: security barrier not initialized"#,
            },
            PatternEntry {
                id: "etcd",
                name: "etcd",
                description: "etcd structured JSON log format",
                pattern: r#"^\{"level":"(?<level>[^"]+)","ts":"(?<time>[^"]+)","caller":"(?<caller>[^"]+)","msg":"(?<msg>[^"]+)"(?<rest>.*)\}$"#,
                time_format: "",
                sample: r#"{"level":"info","ts":"2023-10-10T13:55:36.123Z","caller":"embed/etcd.go:308","msg":"starting an etcd server","etcd-version":"3.5.9"}"#,
            },
            PatternEntry {
                id: "jenkins",
                name: "Jenkins",
                description: "Jenkins controller log format",
                pattern: r#"^(?<time>[^ ]+ [^ ]+) \[id=(?<id>\d+)\] (?<level>[A-Z]+) (?<source>[^:]+): (?<message>.*)$"#,
                time_format: "%Y-%m-%d %H:%M:%S",
                sample: r#"2023-10-10 13:55:36.123+0000 [id=27] INFO hudson.lifecycle.Lifecycle#onReady: Jenkins is fully up and running"#,
            },
            PatternEntry {
                id: "gitlab-production",
                name: "GitLab Production Log",
                description: "GitLab Rails production log format",
                pattern: r#"^(?<severity>[A-Z]), \[(?<time>[^ ]+) #(?<pid>\d+)\] (?<level>[A-Z]+) -- : (?<message>.*)$"#,
                time_format: "",
                sample: r#"I, [2023-10-10T13:55:36.123456 #1234] INFO -- : Started GET "/users/sign_in" for 192.168.1.100 at 2023-10-10 13:55:36 +0000"#,
            },
            PatternEntry {
                id: "datadog-agent",
                name: "Datadog Agent",
                description: "Datadog Agent log format",
                pattern: r#"^(?<time>[^|]+) \| (?<service>[^ ]+) \| (?<level>[A-Z]+) \| \((?<file>[^:]+):(?<line>\d+) in (?<func>[^)]+)\) \| (?<message>.*)$"#,
                time_format: "",
                sample: r#"2023-10-10 13:55:36 UTC | CORE | INFO | (pkg/collector/runner/runner.go:261 in work) | check:cpu | Running check"#,
            },
        ],
    },
    PatternCategory {
        id: "network-services",
        name: "Network Services",
        patterns: &[
            PatternEntry {
                id: "bind-query",
                name: "BIND Query Log",
                description: "BIND DNS query log format",
                pattern: r#"^(?<time>[^ ]+ [^ ]+) queries: (?<level>[^:]+): client (?<client>[^ ]+) \((?<domain>[^)]+)\): query: (?<query>.*)$"#,
                time_format: "%d-%b-%Y %H:%M:%S",
                sample: r#"10-Oct-2023 13:55:36.123 queries: info: client 192.168.1.100#54321 (example.com): query: example.com IN A +E(0)K (10.0.0.5)"#,
            },
            PatternEntry {
                id: "dnsmasq",
                name: "dnsmasq",
                description: "dnsmasq DNS/DHCP service logs",
                pattern: r#"^(?<time>[^ ]* [^ ]* [^ ]*) (?<host>[^ ]*) dnsmasq\[(?<pid>\d+)\]: (?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"Oct 10 13:55:36 router dnsmasq[1234]: query[A] example.com from 192.168.1.100"#,
            },
            PatternEntry {
                id: "isc-dhcpd",
                name: "ISC DHCP Server",
                description: "ISC DHCP server lease log format",
                pattern: r#"^(?<time>[^ ]* [^ ]* [^ ]*) (?<host>[^ ]*) dhcpd\[(?<pid>\d+)\]: (?<action>DHCPDISCOVER|DHCPOFFER|DHCPREQUEST|DHCPACK|DHCPNAK|DHCPRELEASE) (?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"Oct 10 13:55:36 server dhcpd[1234]: DHCPACK on 192.168.1.100 to 00:11:22:33:44:55 via eth0"#,
            },
            PatternEntry {
                id: "openvpn",
                name: "OpenVPN",
                description: "OpenVPN server log format",
                pattern: r#"^(?<time>[^ ]+ [^ ]+ +\d+ [^ ]+ \d+) (?<message>.*)$"#,
                time_format: "%a %b %d %H:%M:%S %Y",
                sample: r#"Tue Oct 10 13:55:36 2023 OpenVPN 2.6.5 x86_64-pc-linux-gnu [SSL (OpenSSL)] [LZO] built on Jun 13 2023"#,
            },
            PatternEntry {
                id: "sshd",
                name: "OpenSSH",
                description: "OpenSSH authentication log format",
                pattern: r#"^(?<time>[^ ]* [^ ]* [^ ]*) (?<host>[^ ]*) sshd\[(?<pid>\d+)\]: (?<event>Accepted|Failed) (?<method>[^ ]+) for (?<user>[^ ]+) from (?<src_ip>[^ ]+) port (?<port>\d+) (?<protocol>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"Oct 10 13:55:36 server sshd[1234]: Accepted publickey for frank from 192.168.1.100 port 54321 ssh2: ED25519 SHA256:abcdef"#,
            },
            PatternEntry {
                id: "vsftpd",
                name: "vsftpd",
                description: "vsftpd FTP transfer log format",
                pattern: r#"^(?<time>[^ ]+ [^ ]+ +\d+ [^ ]+ \d+) \[pid (?<pid>\d+)\] \[(?<user>[^\]]+)\] (?<event>[^:]+): (?<message>.*)$"#,
                time_format: "%a %b %d %H:%M:%S %Y",
                sample: r#"Tue Oct 10 13:55:36 2023 [pid 1234] [frank] OK UPLOAD: Client "192.168.1.100", "/home/frank/file.txt", 2326 bytes, 12.34Kbyte/sec"#,
            },
            PatternEntry {
                id: "freeradius",
                name: "FreeRADIUS",
                description: "FreeRADIUS authentication log format",
                pattern: r#"^(?<time>[^ ]+ [^ ]+ +\d+ [^ ]+ \d+) : (?<level>[^:]+): (?<message>.*)$"#,
                time_format: "%a %b %d %H:%M:%S %Y",
                sample: r#"Tue Oct 10 13:55:36 2023 : Auth: (1234) Login OK: [frank] (from client localhost port 0)"#,
            },
            PatternEntry {
                id: "ntpd",
                name: "NTP Daemon",
                description: "NTP daemon log format",
                pattern: r#"^(?<time>[^ ]* [^ ]* [^ ]*) (?<host>[^ ]*) ntpd\[(?<pid>\d+)\]: (?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"Oct 10 13:55:36 server ntpd[1234]: adjusting local clock by 0.123456s"#,
            },
            PatternEntry {
                id: "keepalived",
                name: "Keepalived",
                description: "Keepalived VRRP transition logs",
                pattern: r#"^(?<time>[^ ]* [^ ]* [^ ]*) (?<host>[^ ]*) Keepalived_vrrp\[(?<pid>\d+)\]: (?<message>.*)$"#,
                time_format: "%b %d %H:%M:%S",
                sample: r#"Oct 10 13:55:36 lb01 Keepalived_vrrp[1234]: VRRP_Instance(VI_1) Transition to MASTER STATE"#,
            },
        ],
    },
];
